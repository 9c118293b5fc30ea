pub mod diff_ops;
pub mod key_ops;
pub mod obj_util;
pub mod pick_ops;
pub mod plain_ops;

pub use diff_ops::{diff, Diff, PropertyNames};
pub use key_ops::{keys, rest, values, KeyOptions};
pub use obj_util::ObjUtil;
pub use pick_ops::pick;
pub use plain_ops::to_plain_deep;
