use tokio::sync::broadcast;

use crate::models::{CartEvent, Notice, NoticeKind};

pub const MSG_OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";
pub const MSG_ADD_FAILED: &str = "Erro na adição do produto";
pub const MSG_REMOVE_FAILED: &str = "Erro na remoção do produto";
pub const MSG_UPDATE_FAILED: &str = "Erro na alteração de quantidade do produto";

/// Fans cart events out to every open page. Sending without subscribers is fine.
#[derive(Clone)]
pub struct Notifier {
    events_tx: broadcast::Sender<CartEvent>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (events_tx, _events_rx) = broadcast::channel(capacity);
        Self { events_tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events_tx.subscribe()
    }

    pub fn notify(&self, notice: Notice) -> Notice {
        match notice.kind {
            NoticeKind::Warning => tracing::warn!("cart notice: {}", notice.message),
            NoticeKind::Error => tracing::error!("cart notice: {}", notice.message),
        }

        let _ = self.events_tx.send(CartEvent::Notice(notice.clone()));
        notice
    }

    pub fn cart_updated(&self) {
        let _ = self.events_tx.send(CartEvent::Updated);
    }
}
