//! Shared Identity - 读者与馆员共用的身份信息
//!
//! Reader 与 LibraryStaff 是两个独立角色，通过组合同一个 Identity 共享姓名与地址

use serde::{Deserialize, Serialize};

/// 姓名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("name cannot be empty");
        }
        if trimmed.len() > 100 {
            return Err("name cannot exceed 100 characters");
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 通讯地址（不做格式校验，只要求非空）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Result<Self, &'static str> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err("address cannot be empty");
        }
        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 身份信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    name: PersonName,
    address: Address,
}

impl Identity {
    pub fn new(name: PersonName, address: Address) -> Self {
        Self { name, address }
    }

    /// 从原始字符串构造，任一字段无效即失败
    pub fn parse(name: &str, address: &str) -> Result<Self, &'static str> {
        Ok(Self::new(PersonName::new(name)?, Address::new(address)?))
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let name = PersonName::new("  Vineesha ").unwrap();
        assert_eq!(name.as_str(), "Vineesha");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(PersonName::new("   ").is_err());
        assert!(Address::new("").is_err());
        assert!(Identity::parse("Vineesha", " ").is_err());
    }

    #[test]
    fn test_identity_parse() {
        let identity = Identity::parse("Vineesha", "123 Street, City").unwrap();
        assert_eq!(identity.name().as_str(), "Vineesha");
        assert_eq!(identity.address().as_str(), "123 Street, City");
    }
}
