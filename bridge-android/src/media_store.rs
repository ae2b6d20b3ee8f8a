//! `MediaStore` over Android's `ContentResolver`.

use bridge_traits::{
    error::{BridgeError, Result},
    media_store::{
        MediaCollection, MediaColumn, MediaCursor, MediaQuery, MediaStore, VOLUME_EXTERNAL,
    },
};
use jni::objects::{GlobalRef, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::descriptors::*;
use crate::jvm::{attach, check};

/// Local reference budget for a single JNI round trip.
const LOCAL_FRAME_CAPACITY: i32 = 16;

/// Platform media index backed by `ContentResolver.query`.
pub struct AndroidMediaStore {
    vm: Arc<JavaVM>,
    context: GlobalRef,
}

impl AndroidMediaStore {
    /// `context` is any `android.content.Context`; the host passes its
    /// activity from `nativeInit`.
    pub fn new(vm: Arc<JavaVM>, context: GlobalRef) -> Self {
        Self { vm, context }
    }

    fn open_cursor(&self, env: &mut JNIEnv<'_>, query: &MediaQuery) -> jni::errors::Result<Option<GlobalRef>> {
        env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| {
            let resolver = env
                .call_method(
                    self.context.as_obj(),
                    "getContentResolver",
                    GET_CONTENT_RESOLVER_SIG,
                    &[],
                )?
                .l()?;

            let uri = collection_uri(env, query.collection)?;

            let projection = env.new_object_array(
                query.projection.len() as i32,
                STRING_CLASS,
                JObject::null(),
            )?;
            for (index, column) in query.projection.iter().enumerate() {
                let name = env.new_string(column.name())?;
                env.set_object_array_element(&projection, index as i32, &name)?;
            }

            let sort_order = match query.sort_order {
                Some(order) => JObject::from(env.new_string(order.to_clause())?),
                None => JObject::null(),
            };

            let selection = JObject::null();
            let selection_args = JObject::null();
            let cursor = env
                .call_method(
                    &resolver,
                    "query",
                    RESOLVER_QUERY_SIG,
                    &[
                        JValue::Object(&uri),
                        JValue::Object(&projection),
                        JValue::Object(&selection),
                        JValue::Object(&selection_args),
                        JValue::Object(&sort_order),
                    ],
                )?
                .l()?;

            if cursor.is_null() {
                return Ok(None);
            }
            Ok(Some(env.new_global_ref(&cursor)?))
        })
    }
}

impl MediaStore for AndroidMediaStore {
    fn query(&self, query: &MediaQuery) -> Result<Option<Box<dyn MediaCursor>>> {
        let mut env = attach(&self.vm)?;
        let result = self.open_cursor(&mut env, query);
        let cursor = check(&mut env, result, "ContentResolver.query")?;

        debug!(
            collection = ?query.collection,
            opened = cursor.is_some(),
            "Queried MediaStore"
        );

        Ok(cursor.map(|cursor| {
            Box::new(AndroidCursor::new(Arc::clone(&self.vm), cursor)) as Box<dyn MediaCursor>
        }))
    }
}

fn collection_uri<'local>(
    env: &mut JNIEnv<'local>,
    collection: MediaCollection,
) -> jni::errors::Result<JObject<'local>> {
    match collection {
        MediaCollection::ExternalVolume => {
            let volume = env.new_string(VOLUME_EXTERNAL)?;
            env.call_static_method(
                VIDEO_MEDIA_CLASS,
                "getContentUri",
                GET_CONTENT_URI_SIG,
                &[JValue::Object(&volume)],
            )?
            .l()
        }
        MediaCollection::LegacyExternalContent => env
            .get_static_field(VIDEO_MEDIA_CLASS, "EXTERNAL_CONTENT_URI", URI_TYPE)?
            .l(),
    }
}

/// `android.database.Cursor` held as a global reference.
///
/// `Cursor.close()` is called when the value is dropped.
pub struct AndroidCursor {
    vm: Arc<JavaVM>,
    cursor: GlobalRef,
}

impl AndroidCursor {
    pub fn new(vm: Arc<JavaVM>, cursor: GlobalRef) -> Self {
        Self { vm, cursor }
    }

    /// Run one cursor call inside its own local reference frame.
    fn call<T, F>(&self, what: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
    {
        let mut env = attach(&self.vm)?;
        let cursor = self.cursor.as_obj();
        let result = env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| f(env, cursor));
        check(&mut env, result, what)
    }
}

impl MediaCursor for AndroidCursor {
    fn move_to_next(&mut self) -> Result<bool> {
        self.call("Cursor.moveToNext", |env, cursor| {
            env.call_method(cursor, "moveToNext", MOVE_TO_NEXT_SIG, &[])?
                .z()
        })
    }

    fn column_index(&self, column: MediaColumn) -> Result<usize> {
        let index = self.call("Cursor.getColumnIndexOrThrow", |env, cursor| {
            let name = env.new_string(column.name())?;
            env.call_method(
                cursor,
                "getColumnIndexOrThrow",
                GET_COLUMN_INDEX_OR_THROW_SIG,
                &[JValue::Object(&name)],
            )?
            .i()
        })?;

        usize::try_from(index).map_err(|_| {
            BridgeError::OperationFailed(format!("Column '{}' does not exist", column))
        })
    }

    fn get_i64(&self, index: usize) -> Result<Option<i64>> {
        let index = column_arg(index)?;
        self.call("Cursor.getLong", |env, cursor| {
            if env
                .call_method(cursor, "isNull", IS_NULL_SIG, &[JValue::Int(index)])?
                .z()?
            {
                return Ok(None);
            }
            env.call_method(cursor, "getLong", GET_LONG_SIG, &[JValue::Int(index)])?
                .j()
                .map(Some)
        })
    }

    fn get_string(&self, index: usize) -> Result<Option<String>> {
        let index = column_arg(index)?;
        self.call("Cursor.getString", |env, cursor| {
            let value = env
                .call_method(cursor, "getString", GET_STRING_SIG, &[JValue::Int(index)])?
                .l()?;
            if value.is_null() {
                return Ok(None);
            }
            let value = JString::from(value);
            let text: String = env.get_string(&value)?.into();
            Ok(Some(text))
        })
    }
}

impl Drop for AndroidCursor {
    fn drop(&mut self) {
        let closed = self.call("Cursor.close", |env, cursor| {
            env.call_method(cursor, "close", CLOSE_SIG, &[]).map(|_| ())
        });
        if let Err(err) = closed {
            warn!(error = %err, "Failed to close MediaStore cursor");
        }
    }
}

fn column_arg(index: usize) -> Result<i32> {
    i32::try_from(index)
        .map_err(|_| BridgeError::OperationFailed(format!("Column index {} out of range", index)))
}
