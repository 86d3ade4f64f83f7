use crate::modules::registration::adapters::outbound::rendered_output::RenderedOutput;
use crate::modules::registration::use_cases::register_user::handler::RegisterUserHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub register_handler: Arc<RegisterUserHandler<RenderedOutput>>,
    pub output: Arc<RenderedOutput>,
}

impl AppState {
    pub fn in_memory() -> Self {
        let output = Arc::new(RenderedOutput::new());
        let register_handler = Arc::new(RegisterUserHandler::new(output.clone()));
        Self {
            register_handler,
            output,
        }
    }
}
