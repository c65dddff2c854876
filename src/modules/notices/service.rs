use chrono::Utc;
use tracing::{debug, info, instrument};

use easwipe_core::AppError;
use easwipe_models::{CreateNoticeDto, Notice, NoticeId, Principal};

use crate::store::Store;

pub struct NoticeService;

impl NoticeService {
    /// The notice board is campus-wide. Newest first.
    #[instrument(skip(store))]
    pub async fn get_notices(store: &Store) -> Vec<Notice> {
        let mut notices = store.read().await.notices.clone();
        notices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notices
    }

    #[instrument(skip(store, dto), fields(title = %dto.title))]
    pub async fn create_notice(
        store: &Store,
        principal: &Principal,
        dto: CreateNoticeDto,
    ) -> Result<Notice, AppError> {
        let mut records = store.write().await;
        let author_name = records
            .user(&principal.id)
            .map(|user| user.name.clone())
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        let notice = Notice {
            id: NoticeId::generate(),
            title: dto.title,
            content: dto.content,
            author_id: principal.id.clone(),
            author_name,
            notice_type: dto.notice_type,
            read_by: Vec::new(),
            created_at: Utc::now(),
        };
        records.notices.push(notice.clone());

        info!(notice_id = %notice.id, "Notice posted");
        Ok(notice)
    }

    /// Idempotent: marking an already read notice changes nothing.
    #[instrument(skip(store))]
    pub async fn mark_read(
        store: &Store,
        principal: &Principal,
        id: &NoticeId,
    ) -> Result<Notice, AppError> {
        let mut records = store.write().await;
        let notice = records
            .notices
            .iter_mut()
            .find(|notice| &notice.id == id)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Notice not found")))?;

        if notice.mark_read(&principal.id) {
            debug!(notice_id = %id, user_id = %principal.id, "Notice marked read");
        }
        Ok(notice.clone())
    }
}
