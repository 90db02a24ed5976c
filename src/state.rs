use std::{ops::Deref, sync::Arc};

use crate::{
    config::ApiKeyConfig,
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    extractor::api_key::ApiKeyProvider,
    service::BookService,
    validation::BookValidator,
};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(
        error_verbosity: ErrorVerbosity,
        book_service: Arc<dyn BookService>,
        book_validator: Arc<dyn BookValidator>,
        api_key: Option<ApiKeyConfig>,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                book_service,
                book_validator,
                api_key,
                public_base_url,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    book_service: Arc<dyn BookService>,
    book_validator: Arc<dyn BookValidator>,
    api_key: Option<ApiKeyConfig>,
    public_base_url: Option<String>,
}

impl ApiStateInner {
    pub fn book_service(&self) -> &dyn BookService {
        self.book_service.as_ref()
    }

    pub fn book_validator(&self) -> &dyn BookValidator {
        self.book_validator.as_ref()
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}

impl ApiKeyProvider for ApiState {
    fn api_key_required(&self) -> bool {
        self.api_key.is_some()
    }

    fn header_name(&self) -> &str {
        self.api_key
            .as_ref()
            .map(|api_key| api_key.header_name.as_str())
            .unwrap_or("Authorization")
    }

    fn validate(&self, key: &str) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|api_key| api_key.api_keys.iter().any(|valid| valid == key))
    }
}
