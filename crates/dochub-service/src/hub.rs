//! The document hub state holder.
//!
//! [`DocumentHub`] exclusively owns the folder tree. Reads borrow it
//! shared; every mutation goes through a `&mut self` method, so there is
//! exactly one writer and no locking. A successful tree mutation bumps
//! [`DocumentHub::revision`] and journals one [`DomainEvent`]; views
//! compare revisions to know when to recompute.

use tracing::warn;

use dochub_core::config::HubConfig;
use dochub_core::events::{DomainEvent, EventPayload, FileEvent, FolderEvent, ShareEvent};
use dochub_core::result::AppResult;
use dochub_core::types::{FolderId, PageResponse};
use dochub_entity::folder::seed::default_forest;
use dochub_entity::{
    FileItem, FolderItem, FolderPermission, FolderSummary, FolderTree, NodeRef, UploadBlob,
};

use crate::file::{FileService, SearchService, UploadService, ViewQuery, batch_size};
use crate::folder::{Breadcrumb, FolderService, TreeService};
use crate::share::{ShareIntent, ShareService};

/// Owner of the document tree and entry point for all operations.
#[derive(Debug, Clone)]
pub struct DocumentHub {
    tree: FolderTree,
    revision: u64,
    events: Vec<DomainEvent>,
    tree_service: TreeService,
    search_service: SearchService,
    upload_service: UploadService,
    file_service: FileService,
    folder_service: FolderService,
    share_service: ShareService,
}

impl DocumentHub {
    /// Creates a hub over an existing tree.
    pub fn new(tree: FolderTree, config: &HubConfig) -> AppResult<Self> {
        Ok(Self {
            tree,
            revision: 0,
            events: Vec::new(),
            tree_service: TreeService::new(),
            search_service: SearchService::new(config),
            upload_service: UploadService::new(config),
            file_service: FileService::new(),
            folder_service: FolderService::new(),
            share_service: ShareService::new(config)?,
        })
    }

    /// Creates a hub from a nested forest.
    pub fn from_forest(forest: Vec<FolderItem>, config: &HubConfig) -> AppResult<Self> {
        Self::new(FolderTree::from_forest(forest)?, config)
    }

    /// Creates a hub over the built-in sample forest.
    pub fn seeded(config: &HubConfig) -> AppResult<Self> {
        Self::from_forest(default_forest(), config)
    }

    /// The current tree.
    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// Number of tree mutations applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Events journalled since the last drain, oldest first.
    pub fn events(&self) -> &[DomainEvent] {
        &self.events
    }

    /// Takes the journalled events.
    pub fn drain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    /// Every file in the forest with recomputed paths.
    pub fn flatten(&self) -> Vec<FileItem> {
        self.tree_service.flatten(&self.tree)
    }

    /// The grid view: scope, search, then paginate.
    pub fn view(&self, query: &ViewQuery) -> AppResult<PageResponse<FileItem>> {
        self.search_service.query(&self.tree, query)
    }

    /// The unpaginated matches of a view.
    pub fn matching(&self, query: &ViewQuery) -> AppResult<Vec<FileItem>> {
        self.search_service.matching(&self.tree, query)
    }

    /// Breadcrumb trail for a folder.
    pub fn breadcrumbs(&self, folder_id: &FolderId) -> AppResult<Vec<Breadcrumb>> {
        self.tree_service.breadcrumbs(&self.tree, folder_id)
    }

    /// Counts and location of a folder.
    pub fn summary(&self, folder_id: &FolderId) -> AppResult<FolderSummary> {
        self.tree.summary(folder_id)
    }

    /// Display-only collaborators of a folder.
    pub fn permissions(&self, folder_id: &FolderId) -> AppResult<Vec<FolderPermission>> {
        self.folder_service.permissions(&self.tree, folder_id)
    }

    /// The current tree in nested form.
    pub fn export(&self) -> Vec<FolderItem> {
        self.tree.to_forest()
    }

    /// Uploads a batch into the selected folder.
    pub fn upload(
        &mut self,
        target: Option<&FolderId>,
        blobs: Vec<UploadBlob>,
    ) -> AppResult<Vec<FileItem>> {
        let sizes: Vec<u64> = blobs.iter().map(|b| b.size_bytes).collect();
        let created = self
            .upload_service
            .upload(&mut self.tree, target, blobs)
            .inspect_err(|e| warn!(error = %e, "Upload failed"))?;
        let total_bytes = batch_size(sizes)?;

        if let Some(folder_id) = target {
            self.commit(FileEvent::Uploaded {
                folder_id: folder_id.clone(),
                file_ids: created.iter().map(|f| f.id.clone()).collect(),
                total_bytes,
            });
        }

        Ok(created)
    }

    /// Renames a file or folder in place.
    pub fn rename(&mut self, node: &NodeRef, new_name: &str) -> AppResult<()> {
        match node {
            NodeRef::File(file_id) => {
                let old_name = self
                    .file_service
                    .rename_file(&mut self.tree, file_id, new_name)
                    .inspect_err(|e| warn!(error = %e, "Rename failed"))?;
                let new_name = self.tree.require_file(file_id)?.item.name.clone();
                self.commit(FileEvent::Renamed {
                    file_id: file_id.clone(),
                    old_name,
                    new_name,
                });
            }
            NodeRef::Folder(folder_id) => {
                let old_name = self
                    .folder_service
                    .rename_folder(&mut self.tree, folder_id, new_name)
                    .inspect_err(|e| warn!(error = %e, "Rename failed"))?;
                let new_name = self.tree.require_folder(folder_id)?.name.clone();
                self.commit(FolderEvent::Renamed {
                    folder_id: folder_id.clone(),
                    old_name,
                    new_name,
                });
            }
        }
        Ok(())
    }

    /// Requests a share. The tree is not changed, so the revision stays.
    pub fn share(&mut self, target: &NodeRef, email: &str) -> AppResult<ShareIntent> {
        let intent = self
            .share_service
            .share(&self.tree, target, email)
            .inspect_err(|e| warn!(error = %e, "Share failed"))?;

        self.events.push(DomainEvent::new(
            self.revision,
            ShareEvent::Requested {
                share_id: intent.id.clone(),
                resource_type: intent.target.resource_type().to_string(),
                resource_id: intent.target.id_str().to_string(),
                email: intent.email.clone(),
                role: intent.role.to_string(),
            }
            .into(),
        ));

        Ok(intent)
    }

    fn commit(&mut self, payload: impl Into<EventPayload>) {
        self.revision += 1;
        self.events
            .push(DomainEvent::new(self.revision, payload.into()));
    }
}
