#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("网络请求失败: {0}")]
    Network(String),
    #[error("查询地址无效: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("无法创建 HTTP 客户端: {0}")]
    Client(#[from] reqwest::Error),
    #[error("输出失败: {0}")]
    Output(#[from] std::io::Error),
}

impl DictError {
    /// Every hard failure exits with 1; soft outcomes use [`crate::lookup::Outcome::exit_code`].
    pub fn exit_code(&self) -> u8 {
        1
    }
}
