//! 用户加载服务
//!
//! 启动时在 tokio 运行时上发起唯一一次请求，
//! 结果（失败时为空列表）通过通道发送给主循环。

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use user_roster_core::{load_users, FetchError, UserSource};

use crate::message::AppMessage;

/// 用户加载服务
pub struct RosterService {
    source: Arc<dyn UserSource>,
}

impl RosterService {
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self { source }
    }

    /// 在后台加载用户，完成后发送 `AppMessage::UsersLoaded`
    pub fn spawn_initial_load(&self, tx: UnboundedSender<AppMessage>) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let users = load_users(source.as_ref()).await;
            if tx.send(AppMessage::UsersLoaded(users)).is_err() {
                log::debug!("UI closed before users arrived");
            }
        })
    }
}

/// 启动时加载用户
///
/// 数据源创建失败（如 TLS 后端初始化失败）与请求失败同样处理：
/// 记录日志并发送空列表，界面照常启动。
pub fn start_initial_load(
    source: Result<Arc<dyn UserSource>, FetchError>,
    tx: UnboundedSender<AppMessage>,
) -> Option<JoinHandle<()>> {
    match source {
        Ok(source) => Some(RosterService::new(source).spawn_initial_load(tx)),
        Err(e) => {
            log::error!("Error creating user source: {e}");
            if tx.send(AppMessage::UsersLoaded(Vec::new())).is_err() {
                log::debug!("UI closed before users arrived");
            }
            None
        }
    }
}
