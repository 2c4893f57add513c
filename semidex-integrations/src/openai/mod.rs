//! This module provides integration with `OpenAI`'s embeddings API. It
//! includes the `OpenAI` struct for managing the API client and the default
//! embedding model. The client reads `OPENAI_API_KEY` from the environment
//! unless one is configured explicitly; a missing or invalid key surfaces
//! as the embedding call's own failure, never as a local pre-check.

use std::sync::Arc;

use derive_builder::Builder;

mod embed;

// expose the config type to simplify downstream use of the builder
pub use async_openai::config::OpenAIConfig;

/// The `OpenAI` struct encapsulates an `OpenAI` client and the default
/// embedding model. It uses the `Builder` pattern for flexible and
/// customizable instantiation.
///
/// # Example
///
/// ```no_run
/// # use semidex_integrations::openai::OpenAI;
///
/// // Uses the OPENAI_API_KEY environment variable.
/// let openai = OpenAI::builder()
///     .default_embed_model("text-embedding-3-large")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Builder, Clone)]
#[builder(setter(into, strip_option))]
pub struct OpenAI {
    /// The `OpenAI` client, wrapped in an `Arc` for thread-safe reference
    /// counting. Defaults to a new instance of `async_openai::Client`.
    #[builder(default = "Arc::new(async_openai::Client::new())", setter(custom))]
    client: Arc<async_openai::Client<OpenAIConfig>>,

    /// Default options for the embedding model.
    #[builder(default)]
    pub(crate) default_options: Options,
}

/// The `Options` struct holds configuration options for the `OpenAI`
/// client.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into, strip_option))]
pub struct Options {
    /// The embedding model to use, if specified.
    #[builder(default)]
    pub embed_model: Option<String>,
}

impl Options {
    /// Creates a new `OptionsBuilder` for constructing `Options` instances.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

impl OpenAI {
    /// Creates a new `OpenAIBuilder` for constructing `OpenAI` instances.
    pub fn builder() -> OpenAIBuilder {
        OpenAIBuilder::default()
    }
}

impl OpenAIBuilder {
    /// Sets the `OpenAI` client for the `OpenAI` instance.
    pub fn client(&mut self, client: async_openai::Client<OpenAIConfig>) -> &mut Self {
        self.client = Some(Arc::new(client));
        self
    }

    /// Sets the default embedding model for the `OpenAI` instance.
    pub fn default_embed_model(&mut self, model: impl Into<String>) -> &mut Self {
        if let Some(options) = self.default_options.as_mut() {
            options.embed_model = Some(model.into());
        } else {
            self.default_options = Some(Options {
                embed_model: Some(model.into()),
            });
        }
        self
    }
}
