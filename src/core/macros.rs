//! 核心宏定义

/// 为配置结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use kiln_engine::impl_default;
///
/// struct WindowConfig {
///     width: u32,
///     title: String,
/// }
///
/// impl_default!(WindowConfig {
///     width: 1280,
///     title: String::from("kiln"),
/// });
///
/// assert_eq!(WindowConfig::default().width, 1280);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}
