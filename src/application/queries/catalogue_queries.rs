//! Catalogue Queries

/// 获取书目详情查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub isbn: String,
}

/// 列出全部书目查询
#[derive(Debug, Clone)]
pub struct ListBooks;
