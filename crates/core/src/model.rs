/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. An external optimizer comparing runs relies on that property.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;

    /// Calls the model and captures the input alongside the output.
    ///
    /// # Errors
    ///
    /// Returns the model's error if the call fails.
    fn snapshot(
        &self,
        input: Self::Input,
    ) -> Result<Snapshot<Self::Input, Self::Output>, Self::Error> {
        let output = self.call(&input)?;
        Ok(Snapshot::new(input, output))
    }
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Doubler;

    impl Model for Doubler {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Self::Error> {
            Ok(2.0 * input)
        }
    }

    #[test]
    fn snapshot_captures_input_and_output() {
        let snapshot = Doubler.snapshot(1.5).unwrap();

        assert_eq!(snapshot, Snapshot::new(1.5, 3.0));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = Doubler.call(&-0.25).unwrap();
        let second = Doubler.call(&-0.25).unwrap();

        assert_eq!(first.to_bits(), second.to_bits());
    }
}
