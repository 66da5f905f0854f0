pub mod dashboard;
pub mod login;
pub mod register;

pub use dashboard::ServerDashboard;
pub use login::Login;
pub use register::Register;
