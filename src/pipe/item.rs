//! # 管道条目
//!
//! `PipeItem` 描述条目如何映射为路径（用于推导输出文件名），
//! 以及文件输入模式下如何由路径构造条目。

use std::path::PathBuf;

/// 可被管道处理的条目
///
/// 数字、字符等非路径条目按其字符串形式推导输出文件名，
/// 例如条目 `3` 配合后缀 `.txt` 得到 `<destination>/3.txt`。
/// 二元组按第一个元素推导。
pub trait PipeItem: Clone + Send {
    /// 条目对应的路径
    fn item_path(&self) -> PathBuf;

    /// 由目录中的文件路径构造条目，不支持时返回 `None`
    fn from_path(_path: PathBuf) -> Option<Self> {
        None
    }
}

impl PipeItem for PathBuf {
    fn item_path(&self) -> PathBuf {
        self.clone()
    }

    fn from_path(path: PathBuf) -> Option<Self> {
        Some(path)
    }
}

impl PipeItem for String {
    fn item_path(&self) -> PathBuf {
        PathBuf::from(self)
    }

    fn from_path(path: PathBuf) -> Option<Self> {
        path.into_os_string().into_string().ok()
    }
}

impl PipeItem for &str {
    fn item_path(&self) -> PathBuf {
        PathBuf::from(self)
    }
}

impl<A: PipeItem, B: Clone + Send> PipeItem for (A, B) {
    fn item_path(&self) -> PathBuf {
        self.0.item_path()
    }
}

macro_rules! impl_display_item {
    ($($ty:ty),*) => {
        $(
            impl PipeItem for $ty {
                fn item_path(&self) -> PathBuf {
                    PathBuf::from(self.to_string())
                }
            }
        )*
    };
}

impl_display_item!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool
);
