//! 電網文字檔讀取

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use powernet_core::{ConsumptionLevel, Generator, House, Network};

use crate::{ParseError, ParseErrorKind, Result};

/// 檔案區段（只能依序前進）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Section {
    Generators,
    Houses,
    Connections,
}

/// 電網讀取器
pub struct NetworkReader;

impl NetworkReader {
    /// 從字串讀取
    pub fn read_str(input: &str) -> Result<Network> {
        Self::read_from(input.as_bytes())
    }

    /// 從檔案讀取
    pub fn read_path(path: impl AsRef<Path>) -> Result<Network> {
        let path = path.as_ref();
        tracing::debug!("讀取電網檔案: {}", path.display());

        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// 從任意緩衝讀取來源讀取
    ///
    /// 任何一行出錯都會中止整個讀取，不回傳部分電網。
    pub fn read_from<R: BufRead>(reader: R) -> Result<Network> {
        let mut network = Network::new();
        let mut section = Section::Generators;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let raw = line?;
            let content = raw.trim();

            if content.is_empty() {
                continue;
            }

            let fail = |kind| ParseError::new(line_no, content, kind);

            let body = content
                .strip_suffix('.')
                .ok_or_else(|| fail(ParseErrorKind::MissingTerminator))?;

            if let Some(args) = body.strip_prefix("generateur(") {
                if section > Section::Generators {
                    return Err(fail(ParseErrorKind::GeneratorOutOfOrder).into());
                }

                let (name, capacity) =
                    split_args(args).ok_or_else(|| fail(ParseErrorKind::InvalidGenerator))?;
                let capacity: u32 = capacity
                    .parse()
                    .map_err(|_| fail(ParseErrorKind::InvalidGenerator))?;

                network.add_generator(Generator::new(name, capacity));
            } else if let Some(args) = body.strip_prefix("maison(") {
                if section > Section::Houses {
                    return Err(fail(ParseErrorKind::HouseOutOfOrder).into());
                }
                if section != Section::Houses {
                    tracing::debug!("第 {} 行進入房屋區段", line_no);
                    section = Section::Houses;
                }

                let (name, level) =
                    split_args(args).ok_or_else(|| fail(ParseErrorKind::InvalidHouse))?;
                let consumption: ConsumptionLevel = level
                    .parse()
                    .map_err(|_| fail(ParseErrorKind::InvalidConsumption))?;

                network.add_house(House::new(name, consumption));
            } else if let Some(args) = body.strip_prefix("connexion(") {
                if section != Section::Connections {
                    tracing::debug!("第 {} 行進入連線區段", line_no);
                    section = Section::Connections;
                }

                let (a, b) =
                    split_args(args).ok_or_else(|| fail(ParseErrorKind::InvalidConnection))?;
                let (house, generator) = resolve_connection(&network, a, b)
                    .ok_or_else(|| fail(ParseErrorKind::UnresolvedReference))?;

                network.connect(house, generator)?;
            } else {
                return Err(fail(ParseErrorKind::UnknownFact).into());
            }
        }

        tracing::debug!(
            "讀取完成：發電機 {} 台，房屋 {} 間，連線 {} 筆",
            network.generator_count(),
            network.house_count(),
            network.connection_count()
        );

        Ok(network)
    }
}

/// 拆解 `a,b)` 形式的參數（去除空白，兩個參數皆不可為空）
fn split_args(args: &str) -> Option<(&str, &str)> {
    let inner = args.strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();

    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Some((a, b)),
        _ => None,
    }
}

/// 解析連線兩端：先試 (房屋=a, 發電機=b)，再試對調
fn resolve_connection<'a>(network: &Network, a: &'a str, b: &'a str) -> Option<(&'a str, &'a str)> {
    if network.house(a).is_some() && network.generator(b).is_some() {
        Some((a, b))
    } else if network.house(b).is_some() && network.generator(a).is_some() {
        Some((b, a))
    } else {
        None
    }
}
