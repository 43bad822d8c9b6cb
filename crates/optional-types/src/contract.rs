//! Contract vocabulary shared by argument and return-value checks

use std::fmt;

/// Name of a checked parameter or callable, as it appears in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// 构造时传入的值
    Value,
    /// `filter` 的谓词
    Predicate,
    /// `map` / `flat_map` 的映射函数
    Mapper,
    /// `or` / `or_else_get` 的提供函数
    Supplier,
    /// `if_present` 的动作
    Action,
    /// `if_present_or_else` 的空值动作
    EmptyAction,
    /// `or_else_get_throw` 的错误提供函数
    ErrorSupplier,
}

impl Parameter {
    /// The name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Value => "value",
            Parameter::Predicate => "predicate",
            Parameter::Mapper => "mapper",
            Parameter::Supplier => "supplier",
            Parameter::Action => "action",
            Parameter::EmptyAction => "emptyAction",
            Parameter::ErrorSupplier => "errorSupplier",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of value a contract expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// 非空值
    NonNullish,
    /// `Optional` 容器
    Optional,
    /// 错误值
    Error,
}

impl Expected {
    /// The name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Expected::NonNullish => "non-nullish",
            Expected::Optional => "Optional",
            Expected::Error => "Error",
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names() {
        assert_eq!(Parameter::Value.to_string(), "value");
        assert_eq!(Parameter::EmptyAction.to_string(), "emptyAction");
        assert_eq!(Parameter::ErrorSupplier.to_string(), "errorSupplier");
    }

    #[test]
    fn test_expected_names() {
        assert_eq!(Expected::NonNullish.to_string(), "non-nullish");
        assert_eq!(Expected::Optional.to_string(), "Optional");
        assert_eq!(Expected::Error.to_string(), "Error");
    }
}
