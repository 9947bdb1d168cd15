/// 角優先・最大反転数の着手候補を示す助言役。
pub mod suggest;
pub mod types;

pub type Suggester<R> = suggest::Suggester<R>;
