use serde::{Deserialize, Serialize};

/// A pixel coordinate reported by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Kind of symbol a detection was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolType {
    #[serde(rename = "QRCODE")]
    QrCode,
}

impl std::fmt::Display for SymbolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolType::QrCode => f.write_str("QRCODE"),
        }
    }
}

/// One located symbol as reported by a [`crate::Decoder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Raw payload bytes, not yet validated as text
    pub payload: Vec<u8>,
    pub symbol_type: SymbolType,
    /// Boundary in decoder order. Not guaranteed convex or four-sided.
    pub polygon: Vec<Point>,
    /// QR version, when the decoder reports one
    pub version: Option<usize>,
}

impl Detection {
    /// Build a QR code detection with no version information
    #[must_use]
    pub fn qr(payload: impl Into<Vec<u8>>, polygon: Vec<Point>) -> Self {
        Self {
            payload: payload.into(),
            symbol_type: SymbolType::QrCode,
            polygon,
            version: None,
        }
    }
}

/// A detection whose payload decoded to text, along with the outline drawn for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedCode {
    #[serde(rename = "type")]
    pub symbol_type: SymbolType,
    pub data: String,
    pub outline: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<usize>,
}

impl std::fmt::Display for DecodedCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Detected QR Code!")?;
        writeln!(f, "  Type: {}", self.symbol_type)?;
        writeln!(f, "  Data: {}", self.data)
    }
}

/// What to do when one payload in a multi-code image is not valid UTF-8
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail the whole scan and discard every payload
    #[default]
    Strict,
    /// Skip the bad payload and keep the rest
    Lenient,
}
