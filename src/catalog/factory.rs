use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;

pub(crate) fn create_catalog_service(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Box<dyn CatalogService> {
    let publisher = create_publisher();
    Box::new(CatalogServiceImpl::new(config, book_repository, publisher))
}
