pub mod element;
pub mod event;

pub use element::{
    find_all, find_element, find_element_mut, find_first, for_each_mut, Element,
    ElementPath,
};
pub use event::Event;
