/// Result of [`crate::hash`] or [`crate::shake`]: either the raw digest
/// bytes or its lowercase hexadecimal encoding, depending on the caller's
/// `raw` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Digest {
    Raw(Vec<u8>),
    Hex(String),
}

impl Digest {
    fn from_bytes(bytes: Vec<u8>, raw: bool) -> Self {
        if raw {
            Digest::Raw(bytes)
        } else {
            Digest::Hex(hex::encode(bytes))
        }
    }

    /// The raw bytes, decoding from hex first if this is a [`Digest::Hex`].
    pub fn as_bytes(&self) -> std::borrow::Cow<'_, [u8]> {
        match self {
            Digest::Raw(b) => std::borrow::Cow::Borrowed(b),
            Digest::Hex(s) => std::borrow::Cow::Owned(hex::decode(s).expect("digest is valid hex")),
        }
    }

    /// The lowercase hex encoding, encoding first if this is a [`Digest::Raw`].
    pub fn to_hex(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Digest::Hex(s) => std::borrow::Cow::Borrowed(s),
            Digest::Raw(b) => std::borrow::Cow::Owned(hex::encode(b)),
        }
    }
}

pub(crate) fn finish(bytes: Vec<u8>, raw: bool) -> Digest {
    Digest::from_bytes(bytes, raw)
}
