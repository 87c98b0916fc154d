use crate::checkout::domain::LendingService;
use crate::checkout::domain::service::LendingServiceImpl;
use crate::core::domain::Configuration;

pub fn create_lending_service(config: &Configuration) -> Box<dyn LendingService> {
    Box::new(LendingServiceImpl::new(config))
}
