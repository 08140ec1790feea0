mod available_places;
mod delete_confirmation;
mod error_block;
mod modal;
mod places;

pub use self::{
    available_places::*, delete_confirmation::*, error_block::*, modal::*, places::*,
};
