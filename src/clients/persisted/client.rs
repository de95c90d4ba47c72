//! The PlayStation Store persisted-query client.
//!
//! This module provides [`StoreClient`], which executes one persisted query
//! per call and maps the payload into a typed result.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::{ApiError, TransportError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::persisted::{encoder, envelope, extract};
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::{BaseUri, Region, StoreConfig};
use crate::operations::{
    AddOnsByTitleId, Catalog, ConceptById, ConceptByProductId, ConceptStarRating, HashOverrides,
    Operation, OperationDescriptor, PricingDataByConceptId, ProductById, ProductStarRating,
    PsPlusTierOffers,
};
use crate::types::{AddOnProducts, CategoryGrid, Concept, Product, TierSelectorOffers};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Value of the `content-type` header.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Header carrying the store locale.
pub const LOCALE_OVERRIDE_HEADER: &str = "x-psn-store-locale-override";

/// Client for the PlayStation Store GraphQL API.
///
/// Every call runs the same pipeline: encode the request, send it through the
/// [`Transport`], classify HTTP errors, decode the `{data, errors}` envelope,
/// classify GraphQL errors, then map the payload at the operation's data path
/// into its result shape. The first failing stage ends the call with an
/// [`ApiError`]; no partial results are returned.
///
/// The client makes exactly one request per call. It does not retry, cache, or
/// limit concurrency; timeouts and cancellation belong to the transport.
///
/// # Thread Safety
///
/// `StoreClient` is `Send + Sync` when its transport is, so it can be shared
/// across tasks behind an `Arc`. Hash overrides are guarded internally.
///
/// # Example
///
/// ```rust,ignore
/// use psn_store_api::{Region, StoreClient, StoreConfig};
/// use psn_store_api::operations::ProductById;
///
/// let config = StoreConfig::builder().region(Region::UnitedStates).build()?;
/// let client = StoreClient::new(&config)?;
///
/// let product = client
///     .get_product_by_id(&ProductById::new("UP9000-CUSA07408_00-00000000GODOFWAR"))
///     .await?;
/// println!("{:?}", product.name);
/// ```
#[derive(Debug)]
pub struct StoreClient<T: Transport = ReqwestTransport> {
    transport: T,
    base_uri: BaseUri,
    region: Region,
    default_headers: HashMap<String, String>,
    hash_overrides: HashOverrides,
}

// Verify StoreClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreClient>();
};

impl StoreClient<ReqwestTransport> {
    /// Creates a client backed by [`ReqwestTransport`].
    ///
    /// The transport honours [`StoreConfig::timeout`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the HTTP client cannot be created.
    pub fn new(config: &StoreConfig) -> Result<Self, TransportError> {
        let transport = match config.timeout() {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
            None => ReqwestTransport::new()?,
        };
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> StoreClient<T> {
    /// Creates a client that sends requests through `transport`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use psn_store_api::{Region, StoreClient, StoreConfig};
    /// use psn_store_api::clients::ReqwestTransport;
    ///
    /// let config = StoreConfig::builder().region(Region::Russia).build().unwrap();
    /// let transport = Arc::new(ReqwestTransport::new().unwrap());
    ///
    /// let client = StoreClient::with_transport(&config, Arc::clone(&transport));
    /// assert_eq!(client.region().locale(), "ru-ru");
    /// ```
    #[must_use]
    pub fn with_transport(config: &StoreConfig, transport: T) -> Self {
        let region = config.region().clone();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}PlayStation Store API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert(LOCALE_OVERRIDE_HEADER.to_string(), region.locale().to_string());
        default_headers.insert("content-type".to_string(), CONTENT_TYPE_JSON.to_string());
        default_headers.insert("accept".to_string(), CONTENT_TYPE_JSON.to_string());
        default_headers.insert("user-agent".to_string(), user_agent);

        Self {
            transport,
            base_uri: config.base_uri().clone(),
            region,
            default_headers,
            hash_overrides: HashOverrides::new(),
        }
    }

    /// Returns the store region sent with every request.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns this client's hash override table.
    #[must_use]
    pub const fn hash_overrides(&self) -> &HashOverrides {
        &self.hash_overrides
    }

    /// Replaces the persisted-query hash used for `operation_name`.
    ///
    /// The hash is not validated. Calling this again for the same operation
    /// replaces the earlier override.
    ///
    /// # Example
    ///
    /// ```rust
    /// use psn_store_api::{Region, StoreClient, StoreConfig};
    /// use psn_store_api::operations::{Operation, ProductById};
    ///
    /// let config = StoreConfig::builder().region(Region::UnitedStates).build().unwrap();
    /// let client = StoreClient::new(&config).unwrap();
    ///
    /// client.override_hash("metGetProductById", "0123abcd");
    /// assert_eq!(client.resolve_hash(&ProductById::DESCRIPTOR), "0123abcd");
    /// ```
    pub fn override_hash(&self, operation_name: impl Into<String>, hash: impl Into<String>) {
        self.hash_overrides.set(operation_name, hash);
    }

    /// Returns the hash that would be sent for `descriptor`.
    #[must_use]
    pub fn resolve_hash<R>(&self, descriptor: &OperationDescriptor<R>) -> String {
        self.hash_overrides.resolve(descriptor)
    }

    /// Executes a typed request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; see [`execute_descriptor`](Self::execute_descriptor).
    pub async fn execute<O: Operation>(&self, request: &O) -> Result<O::Output, ApiError> {
        self.execute_descriptor(&O::DESCRIPTOR, request).await
    }

    /// Executes the operation described by `descriptor` with `variables`.
    ///
    /// `variables` must serialize to a JSON object (or unit). Keys reserved for
    /// request bookkeeping (`responseDtoClass`, `operationName`, `sha256Hash`,
    /// `dataPath`) are dropped before sending.
    ///
    /// # Errors
    ///
    /// | Failure | Error |
    /// |---|---|
    /// | Variables cannot be encoded | `ServerError` (500) |
    /// | Transport failure | `ServerError` (500), `"Request failed: ..."` |
    /// | HTTP status >= 400 | classified by status, message from the body or the reason phrase |
    /// | Body is not a JSON object | `ServerError` (500), `"Failed to decode JSON response: ..."` |
    /// | Non-empty `errors` array | classified by the HTTP status (usually 200, so `ServerError`) |
    /// | Payload does not fit `R` | `ServerError` (500), `"Unexpected error: ..."` |
    pub async fn execute_descriptor<R, V>(
        &self,
        descriptor: &OperationDescriptor<R>,
        variables: &V,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Default,
        V: Serialize + ?Sized + Sync,
    {
        let operation = descriptor.name();
        let hash = self.resolve_hash(descriptor);

        let variables = encoder::encode_variables(variables)?;
        let query = encoder::build_query(operation, &variables, &hash)?;
        let uri = encoder::operation_uri(&self.base_uri, &query);

        tracing::info!(
            operation,
            uri = %uri,
            region = self.region.locale(),
            "Sending request to PlayStation Store API"
        );
        tracing::debug!(
            operation,
            variables = %serde_json::Value::Object(variables),
            "Request variables"
        );

        let request = HttpRequest::builder(HttpMethod::Get, uri)
            .headers(self.default_headers.clone())
            .build();

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(operation, error = %e, "Request failed");
            ApiError::internal(format!("Request failed: {e}"))
        })?;

        if !response.is_ok() {
            let error = envelope::classify_http_error(&response);
            tracing::warn!(
                operation,
                status = response.status,
                request_id = response.request_id(),
                message = error.message(),
                "PlayStation Store API returned an HTTP error"
            );
            return Err(error);
        }

        let envelope = envelope::decode(&response.body).map_err(|e| {
            tracing::error!(operation, error = %e, "JSON decode error");
            e
        })?;

        envelope::check_errors(&envelope, response.status)?;

        let data_path = descriptor.data_path();
        extract::denormalize::<R>(&envelope, data_path).map_err(|e| {
            tracing::error!(
                operation,
                data_path,
                result_shape = descriptor.result_shape(),
                error = %e,
                "Denormalization error"
            );
            ApiError::internal(format!("Unexpected error: {e}"))
        })
    }

    /// Fetches a product (`metGetProductById`).
    ///
    /// # Errors
    ///
    /// See [`execute_descriptor`](Self::execute_descriptor).
    pub async fn get_product_by_id(&self, request: &ProductById) -> Result<Product, ApiError> {
        self.execute(request).await
    }

    /// Fetches a product's star rating (`wcaProductStarRatingRetrive`).
    ///
    /// # Errors
    ///
    /// See [`execute_descriptor`](Self::execute_descriptor).
    pub async fn get_product_star_rating(
        &self,
        request: &ProductStarRating,
    ) -> Result<Product, ApiError> {
        self.execute(request).await
    }

    /// Fetches a concept (`metGetConceptById`).
    ///
    /// # Errors
    ///
    /// See [`execute_descriptor`](Self::execute_descriptor).
    pub async fn get_concept_by_id(&self, request: &ConceptById) -> Result<Concept, ApiError> {
        self.execute(request).await
    }

    /// Fetches the concept a product belongs to (`metGetConceptByProductIdQuery`).
    ///
    /// # Errors
    ///
    /// See [`execute_descriptor`](Self::execute_descriptor).
    pub async fn get_concept_by_product_id(
        &self,
        request: &ConceptByProductId,
    ) -> Result<Concept, ApiError> {
        self.execute(request).await
    }

    /// Fetches a concept's star rating (`wcaConceptStarRatingRetrive`).
    ///
    /// # Errors
    ///
    /// See [`execute_descriptor`](Self::execute_descriptor).
    pub async fn get_concept_star_rating(
        &self,
        request: &ConceptStarRating,
    ) -> Result<Concept, ApiError> {
        self.execute(request).await
    }

    /// Fetches pricing for a concept's products (`metGetPricingDataByConceptId`).
    ///
    /// # Errors
    ///
    /// See [`execute_descriptor`](Self::execute_descriptor).
    pub async fn get_pricing_data_by_concept_id(
        &self,
        request: &PricingDataByConceptId,
    ) -> Result<Concept, ApiError> {
        self.execute(request).await
    }

    /// Fetches one page of a title's add-ons (`metGetAddOnsByTitleId`).
    ///
    /// # Errors
    ///
    /// See [`execute_descriptor`](Self::execute_descriptor).
    pub async fn get_add_ons_by_title_id(
        &self,
        request: &AddOnsByTitleId,
    ) -> Result<AddOnProducts, ApiError> {
        self.execute(request).await
    }

    /// Fetches PlayStation Plus offers for a tier (`featuresRetrieve`).
    ///
    /// # Errors
    ///
    /// See [`execute_descriptor`](Self::execute_descriptor).
    pub async fn get_ps_plus_tier(
        &self,
        request: &PsPlusTierOffers,
    ) -> Result<TierSelectorOffers, ApiError> {
        self.execute(request).await
    }

    /// Fetches one page of a category (`categoryGridRetrieve`).
    ///
    /// # Errors
    ///
    /// See [`execute_descriptor`](Self::execute_descriptor).
    pub async fn get_catalog(&self, request: &Catalog) -> Result<CategoryGrid, ApiError> {
        self.execute(request).await
    }
}
