//! Concrete views mounted by the presenters.
//!
//! - [`point`]: One itinerary row in display mode
//! - [`point_edit`]: The expanded editor of one point
//! - [`point_list`]: Container element for the rows
//! - [`empty_message`]: Filter-specific placeholder for an empty list
//! - [`sort`]: Sort control (day, time, price)
//! - [`filter`]: Filter control (everything, past, present, future)

pub mod empty_message;
pub mod filter;
pub mod point;
pub mod point_edit;
pub mod point_list;
pub mod sort;

pub use empty_message::EmptyListMessageView;
pub use filter::FilterView;
pub use point::PointView;
pub use point_edit::PointEditView;
pub use point_list::PointListView;
pub use sort::SortView;
