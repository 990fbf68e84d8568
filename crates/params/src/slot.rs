use std::fmt;

/// The primitive type of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Float,
    Int,
    Str,
    Bool,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Float => "float",
            Kind::Int => "integer",
            Kind::Str => "string",
            Kind::Bool => "boolean",
        };
        f.write_str(name)
    }
}

/// A mutable borrow of caller storage that receives a parameter value.
///
/// The variant determines the parameter's [`Kind`]. Slots are normally built
/// through the `From` conversions, so declaring `&mut f64` yields a float
/// parameter and `&mut String` a string parameter.
#[derive(Debug)]
pub enum Slot<'a> {
    Float(&'a mut f64),
    Int(&'a mut i64),
    Str(&'a mut String),
    Bool(&'a mut bool),
}

impl Slot<'_> {
    /// Returns the kind of value this slot accepts.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Slot::Float(_) => Kind::Float,
            Slot::Int(_) => Kind::Int,
            Slot::Str(_) => Kind::Str,
            Slot::Bool(_) => Kind::Bool,
        }
    }

    /// Converts `raw` for this slot without writing it yet.
    ///
    /// Returns `None` if the text is not a valid value of the slot's kind.
    pub(crate) fn prepare(&mut self, raw: &str) -> Option<Pending<'_>> {
        let pending = match self {
            Slot::Float(slot) => Pending::Float(&mut **slot, parse_float(raw)?),
            Slot::Int(slot) => Pending::Int(&mut **slot, parse_int(raw)?),
            Slot::Str(slot) => Pending::Str(&mut **slot, parse_str(raw)),
            Slot::Bool(slot) => Pending::Bool(&mut **slot, parse_bool(raw)?),
        };
        Some(pending)
    }
}

impl<'a> From<&'a mut f64> for Slot<'a> {
    fn from(slot: &'a mut f64) -> Self {
        Slot::Float(slot)
    }
}

impl<'a> From<&'a mut i64> for Slot<'a> {
    fn from(slot: &'a mut i64) -> Self {
        Slot::Int(slot)
    }
}

impl<'a> From<&'a mut String> for Slot<'a> {
    fn from(slot: &'a mut String) -> Self {
        Slot::Str(slot)
    }
}

impl<'a> From<&'a mut bool> for Slot<'a> {
    fn from(slot: &'a mut bool) -> Self {
        Slot::Bool(slot)
    }
}

/// A converted value paired with the storage it will be written to.
#[derive(Debug)]
pub(crate) enum Pending<'s> {
    Float(&'s mut f64, f64),
    Int(&'s mut i64, i64),
    Str(&'s mut String, String),
    Bool(&'s mut bool, bool),
}

impl Pending<'_> {
    /// Writes the value into its storage.
    pub(crate) fn commit(self) {
        match self {
            Pending::Float(slot, v) => *slot = v,
            Pending::Int(slot, v) => *slot = v,
            Pending::Str(slot, v) => *slot = v,
            Pending::Bool(slot, v) => *slot = v,
        }
    }
}

/// Drops a trailing `#` or `//` comment from a non-string value.
fn strip_trailing_comment(raw: &str) -> &str {
    let end = [raw.find('#'), raw.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(raw.len());
    raw[..end].trim()
}

fn parse_float(raw: &str) -> Option<f64> {
    strip_trailing_comment(raw).parse().ok()
}

fn parse_int(raw: &str) -> Option<i64> {
    strip_trailing_comment(raw).parse().ok()
}

fn parse_str(raw: &str) -> String {
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
        .to_owned()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match strip_trailing_comment(raw).to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
