
//! Error type definitions.

use std::borrow::Cow;
use std::io::ErrorKind;
pub use std::io::Error as IoError;
pub use std::io::Result as IoResult;
use std::error;
use std::fmt;
use std::convert::TryFrom;


/// A result that may contain a codec error.
pub type Result<T> = std::result::Result<T, Error>;

/// A result that, if ok, contains nothing, and otherwise contains a codec error.
pub type UnitResult = Result<()>;


/// An error that may happen while compressing or decompressing an image.
/// Distinguishes between unsupported input, invalid data,
/// values that do not fit their bit field, and file system errors.
#[derive(Debug)]
pub enum Error {

    /// The input is well formed but describes something this codec does not handle,
    /// for example a graymap instead of a color pixmap.
    NotSupported(Cow<'static, str>),

    /// The contents of the stream are malformed.
    Invalid(Cow<'static, str>),

    /// A value was to be stored in a bit field that is too narrow for it.
    Overflow {

        /// The rejected value.
        value: i128,

        /// The number of bits of the target field.
        width: u32,
    },

    /// The underlying byte stream could not be read or written.
    Io(IoError),
}


impl Error {

    /// Create an error of the variant `Invalid`.
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Error::Invalid(message.into())
    }

    /// Create an error of the variant `NotSupported`.
    pub(crate) fn unsupported(message: impl Into<Cow<'static, str>>) -> Self {
        Error::NotSupported(message.into())
    }
}

/// Enable using the `?` operator on `std::io::Result`.
impl From<IoError> for Error {
    fn from(error: IoError) -> Self {
        if error.kind() == ErrorKind::UnexpectedEof {
            Error::invalid("premature end of stream")
        }
        else {
            Error::Io(error)
        }
    }
}

/// Enable using the `?` operator on results of the raster decoder.
impl From<image::ImageError> for Error {
    fn from(error: image::ImageError) -> Self {
        match error {
            image::ImageError::IoError(io_error) => Error::from(io_error),
            image::ImageError::Unsupported(unsupported) => Error::unsupported(unsupported.to_string()),
            other => Error::invalid(other.to_string()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(formatter, "{}", err),
            Error::NotSupported(message) => write!(formatter, "not supported: {}", message),
            Error::Invalid(message) => write!(formatter, "invalid: {}", message),
            Error::Overflow { value, width } => write!(formatter, "value {} does not fit into {} bits", value, width),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}


/// Convert a header integer to `usize`, returning an error for negative or too large values.
#[inline]
pub(crate) fn i64_to_usize(value: i64, error_message: &'static str) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::invalid(error_message))
}
