//! # PowerNet IO
//!
//! 電網文字檔讀寫
//!
//! ```text
//! generateur(gen1,60).
//! maison(m1,NORMAL).
//! connexion(gen1,m1).
//! ```
//!
//! 區段順序固定為：發電機 -> 房屋 -> 連線。懲罰權重 lambda 不寫入檔案。

pub mod reader;
pub mod writer;

// Re-export 主要類型
pub use reader::NetworkReader;
pub use writer::NetworkWriter;

/// 解析錯誤原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// 行末缺少 `.`
    MissingTerminator,
    /// 發電機出現在房屋或連線之後
    GeneratorOutOfOrder,
    /// 房屋出現在連線之後
    HouseOutOfOrder,
    /// 未知的事實類型
    UnknownFact,
    /// 發電機格式錯誤（參數數量或容量）
    InvalidGenerator,
    /// 房屋格式錯誤（參數數量）
    InvalidHouse,
    /// 無效的消耗等級字面值
    InvalidConsumption,
    /// 連線格式錯誤（參數數量）
    InvalidConnection,
    /// 連線引用的房屋或發電機不存在
    UnresolvedReference,
}

impl ParseErrorKind {
    /// 可讀的錯誤說明
    pub fn description(self) -> &'static str {
        match self {
            ParseErrorKind::MissingTerminator => "行末必須是 '.'",
            ParseErrorKind::GeneratorOutOfOrder => "發電機出現在房屋或連線之後",
            ParseErrorKind::HouseOutOfOrder => "房屋出現在連線之後",
            ParseErrorKind::UnknownFact => "未知的指令",
            ParseErrorKind::InvalidGenerator => "發電機格式錯誤（例：generateur(gen1,60)）",
            ParseErrorKind::InvalidHouse => "房屋格式錯誤（例：maison(m1,NORMAL)）",
            ParseErrorKind::InvalidConsumption => "消耗等級必須是 BASSE、NORMAL 或 FORTE",
            ParseErrorKind::InvalidConnection => "連線格式錯誤（例：connexion(gen1,m1)）",
            ParseErrorKind::UnresolvedReference => "連線引用了不存在的房屋或發電機",
        }
    }
}

/// 解析錯誤（行號從 1 開始）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("第 {line} 行錯誤：{}\n>> {content}", .kind.description())]
pub struct ParseError {
    /// 行號
    pub line: usize,

    /// 原始行內容
    pub content: String,

    /// 錯誤原因
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, content: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            line,
            content: content.into(),
            kind,
        }
    }
}

/// 讀寫錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("檔案讀寫錯誤: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("電網操作錯誤: {0}")]
    Network(#[from] powernet_core::PowerNetError),
}

impl IoError {
    /// 若為解析錯誤，取得其內容
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            IoError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IoError>;
