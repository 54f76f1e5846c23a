pub mod controller;
pub mod draft;
pub mod engine;
pub mod error;
pub mod gate;
pub mod grouped;
pub mod model;
pub mod seed;
pub mod session;
pub mod shape;
pub mod view;

pub use controller::Controller;
pub use draft::Draft;
pub use error::{EditError, EngineError};
pub use gate::{SessionContext, SessionGate};
pub use grouped::{Group, GroupedController};
pub use session::EditSession;
pub use view::Saved;
pub use shape::{Delimiter, EntityShape, FieldKind, FieldSpec, InsertPosition};
