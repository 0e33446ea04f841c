use reqwest::blocking::Client;
use url::Url;

use crate::config::Config;
use crate::error::DictError;

/// Source of raw result pages for a query.
pub trait Fetch {
    fn fetch(&self, query: &str) -> Result<String, DictError>;
}

// 构建查询的url
pub fn build_query_url(endpoint: &Url, word: &str, lang: &str) -> Url {
    let mut parsed = endpoint.clone();
    parsed
        .query_pairs_mut()
        .append_pair("word", word)
        .append_pair("lang", lang);
    parsed
}

pub struct HttpFetcher {
    client: Client,
    endpoint: Url,
    lang: String,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self, DictError> {
        let endpoint = Url::parse(&config.endpoint)?;
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(HttpFetcher {
            client,
            endpoint,
            lang: config.lang.clone(),
        })
    }

    pub fn query_url(&self, word: &str) -> Url {
        build_query_url(&self.endpoint, word, &self.lang)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, query: &str) -> Result<String, DictError> {
        let url = self.query_url(query);
        tracing::debug!(%url, "connecting to dictionary");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| DictError::Network(e.to_string()))?;

        // 非 200 也照常解析，页面里找不到内容时后面会按无结果处理
        let status = resp.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "dictionary responded");
        } else {
            tracing::warn!(status = status.as_u16(), "dictionary answered with an error status");
        }

        resp.text().map_err(|e| DictError::Network(e.to_string()))
    }
}
