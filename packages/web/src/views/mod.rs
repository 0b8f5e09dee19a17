mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod home;
pub use home::Home;

mod project_view;
pub use project_view::ProjectView;

mod task_view;
pub use task_view::TaskView;
