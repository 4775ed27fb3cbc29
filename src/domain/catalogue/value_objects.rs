//! Catalogue Context - Value Objects

use serde::{Deserialize, Serialize};

/// ISBN - 书目唯一标识
///
/// 只做宽松校验：数字、连字符以及结尾的 X
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: impl Into<String>) -> Result<Self, &'static str> {
        let isbn = isbn.into().trim().to_string();
        if isbn.is_empty() {
            return Err("ISBN cannot be empty");
        }
        if isbn.len() > 17 {
            return Err("ISBN cannot exceed 17 characters");
        }
        let body = isbn.strip_suffix(['X', 'x']).unwrap_or(&isbn);
        if !body.chars().all(|c| c.is_ascii_digit() || c == '-') {
            return Err("ISBN may only contain digits, hyphens and a trailing X");
        }
        Ok(Self(isbn))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, &'static str> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err("title cannot be empty");
        }
        if title.len() > 200 {
            return Err("title cannot exceed 200 characters");
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author(String);

impl Author {
    pub fn new(author: impl Into<String>) -> Result<Self, &'static str> {
        let author = author.into();
        if author.trim().is_empty() {
            return Err("author cannot be empty");
        }
        Ok(Self(author))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 登录号 - 每个实体副本的唯一编号（全馆唯一）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessionNumber(String);

impl AccessionNumber {
    /// 按全馆流水号生成，如 `ACC7`
    pub fn sequential(prefix: &str, serial: usize) -> Self {
        Self(format!("{}{}", prefix, serial))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccessionNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn_validation() {
        assert!(Isbn::new("12345").is_ok());
        assert!(Isbn::new("978-0-306-40615-7").is_ok());
        assert!(Isbn::new("0-8044-2957-X").is_ok());
        assert!(Isbn::new("").is_err());
        assert!(Isbn::new("12a45").is_err());
        assert!(Isbn::new("978-0-306-40615-7-1").is_err());
    }

    #[test]
    fn test_isbn_is_trimmed() {
        assert_eq!(Isbn::new(" 67890 ").unwrap().as_str(), "67890");
    }

    #[test]
    fn test_accession_number_format() {
        assert_eq!(AccessionNumber::sequential("ACC", 4).as_str(), "ACC4");
    }
}
