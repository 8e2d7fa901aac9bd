pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod settings;
pub mod signup;
pub mod sub_admins;
pub mod users;

pub use dashboard::Dashboard;
pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use not_found::NotFound;
pub use settings::Settings;
pub use signup::Signup;
pub use sub_admins::SubAdmins;
pub use users::Users;
