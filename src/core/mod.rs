//! Core types shared by the validators, calculators and renderers.

mod error;
mod input;
mod options;
mod style;

pub use error::{InvalidTypeError, Parameter, Requirement};
pub use input::ArrayInput;
pub use options::{LeastSquaresOptions, LeastSquaresOptionsBuilder, OptionsError};
pub use style::{FigureStyle, FigureStyleBuilder, StyleError};
