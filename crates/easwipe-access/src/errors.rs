use easwipe_core::AppError;

use crate::approval::ApprovalDenied;
use crate::hierarchy::HierarchyError;

impl From<HierarchyError> for AppError {
    fn from(err: HierarchyError) -> Self {
        match err {
            HierarchyError::HasChildren { .. } => AppError::conflict(err),
            _ => AppError::bad_request(err),
        }
    }
}

impl From<ApprovalDenied> for AppError {
    fn from(err: ApprovalDenied) -> Self {
        match err {
            ApprovalDenied::NotPending => AppError::conflict(err),
            _ => AppError::forbidden(err.to_string()),
        }
    }
}
