//! Finder sidebar favorites via LaunchServices `LSSharedFileList`
//!
//! The API is deprecated but still backs the sidebar's favorites section.
//! Items are addressed by `LSSharedFileListItemGetID`; every lookup takes a
//! fresh snapshot so no item reference outlives a call.

#![allow(non_upper_case_globals)]

use std::os::raw::c_void;
use std::ptr;

use core_foundation::array::CFArray;
use core_foundation::base::{CFType, TCFType};
use core_foundation::string::CFString;
use core_foundation::url::CFURL;
use core_foundation_sys::array::CFArrayRef;
use core_foundation_sys::base::{
    kCFAllocatorDefault, Boolean, CFAllocatorRef, CFRelease, CFTypeRef, OSStatus,
};
use core_foundation_sys::dictionary::CFDictionaryRef;
use core_foundation_sys::error::CFErrorRef;
use core_foundation_sys::string::CFStringRef;
use core_foundation_sys::url::{CFURLCreateWithString, CFURLRef};
use tracing::{debug, trace};

use crate::infrastructure::traits::{InsertPosition, ItemId, ListItem, SharedFileList};
use crate::infrastructure::ListError;

type LSSharedFileListRef = *mut c_void;
type LSSharedFileListItemRef = *mut c_void;

const kLSSharedFileListNoUserInteraction: u32 = 1;
const kLSSharedFileListDoNotMountVolumes: u32 = 2;

#[link(name = "CoreServices", kind = "framework")]
extern "C" {
    static kLSSharedFileListFavoriteItems: CFStringRef;
    static kLSSharedFileListItemBeforeFirst: LSSharedFileListItemRef;

    fn LSSharedFileListCreate(
        allocator: CFAllocatorRef,
        list_type: CFStringRef,
        list_options: CFTypeRef,
    ) -> LSSharedFileListRef;
    fn LSSharedFileListCopySnapshot(list: LSSharedFileListRef, seed: *mut u32) -> CFArrayRef;
    fn LSSharedFileListItemGetID(item: LSSharedFileListItemRef) -> u32;
    fn LSSharedFileListItemCopyDisplayName(item: LSSharedFileListItemRef) -> CFStringRef;
    fn LSSharedFileListItemCopyResolvedURL(
        item: LSSharedFileListItemRef,
        flags: u32,
        error: *mut CFErrorRef,
    ) -> CFURLRef;
    fn LSSharedFileListInsertItemURL(
        list: LSSharedFileListRef,
        insert_after: LSSharedFileListItemRef,
        display_name: CFStringRef,
        icon: *mut c_void,
        url: CFURLRef,
        properties_to_set: CFDictionaryRef,
        properties_to_clear: CFArrayRef,
    ) -> LSSharedFileListItemRef;
    fn LSSharedFileListItemRemove(
        list: LSSharedFileListRef,
        item: LSSharedFileListItemRef,
    ) -> OSStatus;
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    fn CFPreferencesAppSynchronize(application_id: CFStringRef) -> Boolean;
}

/// The Finder sidebar favorites list of the current user.
pub struct LaunchServicesList {
    list: CFType,
    preferences_domain: CFString,
}

// SAFETY: LSSharedFileList objects are CF types whose operations are
// serialized by LaunchServices; the wrapper holds no thread-local state.
unsafe impl Send for LaunchServicesList {}
unsafe impl Sync for LaunchServicesList {}

impl LaunchServicesList {
    /// Open the favorites list. `preferences_domain` is flushed after writes.
    pub fn open(preferences_domain: &str) -> Result<Self, ListError> {
        let raw = unsafe {
            LSSharedFileListCreate(
                kCFAllocatorDefault,
                kLSSharedFileListFavoriteItems,
                ptr::null(),
            )
        };
        if raw.is_null() {
            return Err(ListError::Unavailable);
        }
        debug!("open: favorites list, domain={}", preferences_domain);
        Ok(Self {
            list: unsafe { CFType::wrap_under_create_rule(raw as CFTypeRef) },
            preferences_domain: CFString::new(preferences_domain),
        })
    }

    fn list_ref(&self) -> LSSharedFileListRef {
        self.list.as_CFTypeRef() as LSSharedFileListRef
    }

    fn copy_items(&self) -> Result<CFArray<CFType>, ListError> {
        let raw = unsafe { LSSharedFileListCopySnapshot(self.list_ref(), ptr::null_mut()) };
        if raw.is_null() {
            return Err(ListError::Unavailable);
        }
        Ok(unsafe { CFArray::wrap_under_create_rule(raw) })
    }

    /// Retained handle of the item with `id` in a fresh snapshot.
    fn find_item(&self, id: ItemId) -> Result<CFType, ListError> {
        let items = self.copy_items()?;
        let found = items
            .iter()
            .find(|item| item_id(item.as_CFTypeRef() as LSSharedFileListItemRef) == id)
            .map(|item| (*item).clone());
        found.ok_or(ListError::ItemNotFound(id.0))
    }
}

fn item_id(item: LSSharedFileListItemRef) -> ItemId {
    ItemId(unsafe { LSSharedFileListItemGetID(item) })
}

fn copy_display_name(item: LSSharedFileListItemRef) -> Option<String> {
    let raw = unsafe { LSSharedFileListItemCopyDisplayName(item) };
    if raw.is_null() {
        return None;
    }
    Some(unsafe { CFString::wrap_under_create_rule(raw) }.to_string())
}

fn copy_resolved_url(item: LSSharedFileListItemRef) -> Option<String> {
    let flags = kLSSharedFileListNoUserInteraction | kLSSharedFileListDoNotMountVolumes;
    let raw = unsafe { LSSharedFileListItemCopyResolvedURL(item, flags, ptr::null_mut()) };
    if raw.is_null() {
        return None;
    }
    let url = unsafe { CFURL::wrap_under_create_rule(raw) };
    Some(url.get_string().to_string())
}

impl SharedFileList for LaunchServicesList {
    fn snapshot(&self) -> Result<Vec<ListItem>, ListError> {
        let items = self.copy_items()?;
        let snapshot: Vec<ListItem> = items
            .iter()
            .map(|item| {
                let item_ref = item.as_CFTypeRef() as LSSharedFileListItemRef;
                ListItem {
                    id: item_id(item_ref),
                    display_name: copy_display_name(item_ref),
                    resolved_url: copy_resolved_url(item_ref),
                }
            })
            .collect();
        trace!("snapshot: {} items", snapshot.len());
        Ok(snapshot)
    }

    fn insert(
        &self,
        position: InsertPosition,
        label: &str,
        url: &str,
    ) -> Result<ItemId, ListError> {
        let url_string = CFString::new(url);
        let url_ref = unsafe {
            CFURLCreateWithString(
                kCFAllocatorDefault,
                url_string.as_concrete_TypeRef(),
                ptr::null(),
            )
        };
        if url_ref.is_null() {
            return Err(ListError::InvalidUrl(url.to_string()));
        }
        let cf_url = unsafe { CFURL::wrap_under_create_rule(url_ref) };
        let name = CFString::new(label);

        // keeps the anchor retained across the insert call
        let anchor = match position {
            InsertPosition::First => None,
            InsertPosition::After(id) => Some(self.find_item(id)?),
        };
        let anchor_ref = match &anchor {
            None => unsafe { kLSSharedFileListItemBeforeFirst },
            Some(item) => item.as_CFTypeRef() as LSSharedFileListItemRef,
        };

        let inserted = unsafe {
            LSSharedFileListInsertItemURL(
                self.list_ref(),
                anchor_ref,
                name.as_concrete_TypeRef(),
                ptr::null_mut(),
                cf_url.as_concrete_TypeRef(),
                ptr::null(),
                ptr::null(),
            )
        };
        if inserted.is_null() {
            return Err(ListError::InsertRejected(label.to_string()));
        }
        let id = item_id(inserted);
        unsafe { CFRelease(inserted as CFTypeRef) };
        debug!("insert: '{}' -> {} as item {}", label, url, id.0);
        Ok(id)
    }

    fn remove(&self, id: ItemId) -> Result<(), ListError> {
        let item = self.find_item(id)?;
        let status = unsafe {
            LSSharedFileListItemRemove(
                self.list_ref(),
                item.as_CFTypeRef() as LSSharedFileListItemRef,
            )
        };
        if status != 0 {
            return Err(ListError::Status(status));
        }
        Ok(())
    }

    fn synchronize(&self) -> Result<(), ListError> {
        let ok = unsafe { CFPreferencesAppSynchronize(self.preferences_domain.as_concrete_TypeRef()) };
        if ok == 0 {
            return Err(ListError::SyncFailed(self.preferences_domain.to_string()));
        }
        Ok(())
    }
}
