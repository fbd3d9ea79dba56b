mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod models;
pub use models::Models;

mod managers;
pub use managers::Managers;

mod jobs;
pub use jobs::Jobs;

mod my_jobs;
pub use my_jobs::MyJobs;

mod unauthorized;
pub use unauthorized::Unauthorized;
