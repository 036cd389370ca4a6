pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod markup;
pub mod scroll;

pub use element::{contains, find_element, Boundary, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use markup::to_markup;
pub use scroll::Viewport;
