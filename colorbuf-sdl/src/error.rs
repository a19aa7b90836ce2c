use core::{error, fmt};
use fmt::Display;
use sdl2::render::UpdateTextureError;

#[derive(Debug)]
pub enum Error {
    Core(colorbuf_core::Error),
    Init { msg: String },
    TextureUpdate(UpdateTextureError),
    Draw { msg: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(err) => write!(f, "{err}"),
            Self::Init { msg } => write!(f, "sdl initialization failed: {msg}"),
            Self::TextureUpdate(err) => write!(f, "couldn't upload color buffer to texture: {err}"),
            Self::Draw { msg } => write!(f, "couldn't draw color buffer texture: {msg}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Core(err) => Some(err),
            Self::TextureUpdate(err) => Some(err),
            Self::Init { .. } | Self::Draw { .. } => None,
        }
    }
}

impl From<colorbuf_core::Error> for Error {
    fn from(err: colorbuf_core::Error) -> Self {
        Self::Core(err)
    }
}

impl From<UpdateTextureError> for Error {
    fn from(err: UpdateTextureError) -> Self {
        Self::TextureUpdate(err)
    }
}

impl Error {
    pub(crate) fn init(msg: impl Display) -> Self {
        Self::Init {
            msg: msg.to_string(),
        }
    }
}
