//! Media entity <-> model mapper

use chirp_core::entities::Media;

use crate::models::MediaModel;

impl From<MediaModel> for Media {
    fn from(model: MediaModel) -> Self {
        Media {
            id: model.id,
            file_path: model.file_path,
        }
    }
}
