mod charts;
mod panel;
mod sections;
mod view;

pub use view::AdminDashboard;
