//! 電網文字檔寫出

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use powernet_core::Network;

use crate::Result;

/// 電網寫出器
///
/// 輸出順序：發電機、房屋、連線（依發電機登錄順序，再依連線順序）。
/// 讀回後可得到相同的實體與連線桶。
pub struct NetworkWriter;

impl NetworkWriter {
    /// 寫成字串
    pub fn write_string(network: &Network) -> String {
        let mut out = String::new();
        // 寫入 String 不會失敗
        let _ = Self::write_fmt(network, &mut out);
        out
    }

    /// 依序寫出發電機、房屋、連線
    pub fn write_fmt(network: &Network, out: &mut impl fmt::Write) -> fmt::Result {
        for generator in network.generators() {
            writeln!(
                out,
                "generateur({},{}).",
                generator.name(),
                generator.capacity_max
            )?;
        }
        for house in network.houses() {
            writeln!(out, "maison({},{}).", house.name(), house.consumption)?;
        }
        for (generator, houses) in network.connections() {
            for house in houses {
                writeln!(out, "connexion({},{}).", generator.name(), house.name())?;
            }
        }
        Ok(())
    }

    /// 寫入任意輸出
    pub fn write_to<W: Write>(network: &Network, mut writer: W) -> Result<()> {
        writer.write_all(Self::write_string(network).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// 寫入檔案（覆寫既有檔案）
    pub fn write_path(network: &Network, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!("寫出電網檔案: {}", path.display());

        let file = File::create(path)?;
        Self::write_to(network, BufWriter::new(file))
    }
}
