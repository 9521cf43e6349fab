pub mod fireworks;

pub use fireworks::{
    DEFAULT_FIREWORKS_BASE_URL, DOBBY_MODEL, DOBBY_PERSONA, FireworksProvider, MAX_TOKENS,
    TEMPERATURE,
};
