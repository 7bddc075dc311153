pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "newsprep";
pub const APP_NAME: &str = "prepare";

/// 配置文件名，既用于工作目录也用于用户配置目录
pub const CONFIG_FILE_NAME: &str = "prepare.toml";
