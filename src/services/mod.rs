//! 业务逻辑服务模块
//!
//! 封装数据获取和处理逻辑

pub mod bis;             // BIS 信贷数据服务
pub mod widget_service;  // 组件注册表服务
