use crate::core::controller::AppState;
use crate::registry::domain::RegistryService;
use crate::registry::domain::service::RegistryServiceImpl;

pub(crate) fn create_registry_service(state: &AppState) -> Box<dyn RegistryService> {
    Box::new(RegistryServiceImpl::new(state.author_repository.clone(), state.book_repository.clone()))
}
