pub mod app;
pub mod store;

#[allow(unused_imports)]
pub use app::TestApp;
#[allow(unused_imports)]
pub use store::FailingEnvironmentStore;
