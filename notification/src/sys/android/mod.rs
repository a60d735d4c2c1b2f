//! Android notification implementation using JNI.
//!
//! Talks to the framework classes directly (`Notification.Builder`,
//! `NotificationChannel`, `NotificationManager`, `BitmapFactory`), so no
//! support library has to be bundled with the app.

use crate::channel::{CHANNELS_MIN_API_LEVEL, Channel};
use crate::config::NotifyConfig;
use crate::dispatcher::Dispatcher;
use crate::host::{HostError, NotificationHost, Priority, SmallIcon, Style};
use crate::id::NotificationId;
use crate::resolve::ImageUri;
use crate::sys::close_after;
use droidnotify_permission::sys::android::AndroidPermissionGate;
use jni::objects::{GlobalRef, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};
use std::fmt;
use std::path::PathBuf;

const BUILDER_CLASS: &str = "android/app/Notification$Builder";
const BUILDER_CHAR_SEQUENCE: &str = "(Ljava/lang/CharSequence;)Landroid/app/Notification$Builder;";
const BUILDER_INT: &str = "(I)Landroid/app/Notification$Builder;";

/// `Notification.DEFAULT_ALL`: default sound, vibration and lights.
const DEFAULT_ALL: i32 = -1;

/// API level that introduced `android.graphics.drawable.Icon`.
const ICON_MIN_API_LEVEL: i32 = 23;

/// Capacity hint for the local reference frame of a single host call.
const LOCAL_FRAME_CAPACITY: i32 = 16;

/// [`NotificationHost`] backed by the Android framework.
///
/// Stores the `JavaVM` and a global reference to the context; each call
/// attaches the current thread and runs inside its own local frame. Builders
/// and bitmaps are handed out as global references.
pub struct AndroidHost {
    vm: JavaVM,
    context: GlobalRef,
    api_level: i32,
    app_root: PathBuf,
}

impl fmt::Debug for AndroidHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndroidHost")
            .field("api_level", &self.api_level)
            .field("app_root", &self.app_root)
            .finish_non_exhaustive()
    }
}

impl AndroidHost {
    /// Bind to `context` (an `Activity` or application `Context`).
    ///
    /// The API level and the application root (`<filesDir>/app`) are read
    /// once here. If the files directory cannot be resolved the root falls
    /// back to `./`.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the VM, the API level or a global reference
    /// cannot be obtained.
    pub fn new(env: &mut JNIEnv<'_>, context: &JObject<'_>) -> Result<Self, HostError> {
        let vm = env
            .get_java_vm()
            .map_err(|e| HostError::Jni(format!("get_java_vm failed: {e}")))?;

        let api_level = env
            .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
            .and_then(|value| value.i())
            .map_err(|e| {
                clear_exception(env);
                HostError::Jni(format!("Build.VERSION.SDK_INT: {e}"))
            })?;

        let app_root = match files_dir(env, context) {
            Ok(dir) => dir.join("app"),
            Err(e) => {
                clear_exception(env);
                log::error!("failed to resolve files dir, using ./ as app root: {e}");
                PathBuf::from("./")
            }
        };

        let context = env
            .new_global_ref(context)
            .map_err(|e| HostError::Jni(format!("new_global_ref failed: {e}")))?;

        Ok(Self {
            vm,
            context,
            api_level,
            app_root,
        })
    }

    /// Resolve relative image paths against `root` instead of `<filesDir>/app`.
    #[must_use]
    pub fn with_app_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.app_root = root.into();
        self
    }

    fn with_env<T, F>(&self, call: &str, action: F) -> Result<T, HostError>
    where
        F: FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
    {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| HostError::Jni(format!("attach_current_thread: {e}")))?;
        let context = self.context.as_obj();

        let result = env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| action(env, context));
        result.map_err(|e| {
            clear_exception(&mut env);
            HostError::Jni(format!("{call}: {e}"))
        })
    }
}

/// Dispatcher wired to an activity, with the detected configuration.
///
/// # Errors
/// Returns a [`HostError`] if either binding cannot be created.
pub fn dispatcher(
    env: &mut JNIEnv<'_>,
    activity: &JObject<'_>,
) -> Result<Dispatcher<AndroidHost, AndroidPermissionGate>, HostError> {
    let host = AndroidHost::new(env, activity)?;
    let gate =
        AndroidPermissionGate::new(env, activity).map_err(|e| HostError::Jni(e.to_string()))?;
    Ok(Dispatcher::new(NotifyConfig::detect(), host, gate))
}

fn clear_exception(env: &mut JNIEnv<'_>) {
    if env.exception_check().unwrap_or(false) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
}

fn files_dir(env: &mut JNIEnv<'_>, context: &JObject<'_>) -> jni::errors::Result<PathBuf> {
    let dir = env
        .call_method(context, "getFilesDir", "()Ljava/io/File;", &[])?
        .l()?;
    let path = env
        .call_method(&dir, "getAbsolutePath", "()Ljava/lang/String;", &[])?
        .l()?;
    let path: String = env.get_string(&JString::from(path))?.into();
    Ok(PathBuf::from(path))
}

fn notification_manager<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject<'_>,
) -> jni::errors::Result<JObject<'local>> {
    let service = env.new_string("notification")?;
    let manager = env
        .call_method(
            context,
            "getSystemService",
            "(Ljava/lang/String;)Ljava/lang/Object;",
            &[JValue::Object(&service)],
        )?
        .l()?;
    if manager.is_null() {
        return Err(jni::errors::Error::NullPtr("getSystemService(notification)"));
    }
    Ok(manager)
}

fn app_icon_resource(env: &mut JNIEnv<'_>, context: &JObject<'_>) -> jni::errors::Result<i32> {
    let info = env
        .call_method(
            context,
            "getApplicationInfo",
            "()Landroid/content/pm/ApplicationInfo;",
            &[],
        )?
        .l()?;
    env.get_field(&info, "icon", "I")?.i()
}

fn decode_failure(what: impl fmt::Display) -> HostError {
    HostError::Decode(format!("{what} did not decode to a bitmap"))
}

impl NotificationHost for AndroidHost {
    type Builder = GlobalRef;
    type Bitmap = GlobalRef;

    fn api_level(&self) -> i32 {
        self.api_level
    }

    fn app_root(&self) -> PathBuf {
        self.app_root.clone()
    }

    fn create_channel(&self, channel: &Channel) -> Result<(), HostError> {
        self.with_env("createNotificationChannel", |env, context| {
            let id = env.new_string(&channel.id)?;
            let name = env.new_string(&channel.name)?;
            let native = env.new_object(
                "android/app/NotificationChannel",
                "(Ljava/lang/String;Ljava/lang/CharSequence;I)V",
                &[
                    JValue::Object(&id),
                    JValue::Object(&name),
                    JValue::Int(channel.importance.as_raw()),
                ],
            )?;
            let manager = notification_manager(env, context)?;
            env.call_method(
                &manager,
                "createNotificationChannel",
                "(Landroid/app/NotificationChannel;)V",
                &[JValue::Object(&native)],
            )?;
            Ok(())
        })
    }

    fn new_builder(&self, channel_id: &str) -> Result<GlobalRef, HostError> {
        let with_channel = self.api_level >= CHANNELS_MIN_API_LEVEL;
        self.with_env("Notification.Builder", |env, context| {
            let builder = if with_channel {
                let id = env.new_string(channel_id)?;
                env.new_object(
                    BUILDER_CLASS,
                    "(Landroid/content/Context;Ljava/lang/String;)V",
                    &[JValue::Object(context), JValue::Object(&id)],
                )?
            } else {
                env.new_object(
                    BUILDER_CLASS,
                    "(Landroid/content/Context;)V",
                    &[JValue::Object(context)],
                )?
            };
            env.new_global_ref(builder)
        })
    }

    fn set_content(
        &self,
        builder: &mut GlobalRef,
        title: &str,
        text: &str,
    ) -> Result<(), HostError> {
        self.with_env("setContentTitle/setContentText", |env, _| {
            let title = env.new_string(title)?;
            let text = env.new_string(text)?;
            env.call_method(
                builder.as_obj(),
                "setContentTitle",
                BUILDER_CHAR_SEQUENCE,
                &[JValue::Object(&title)],
            )?;
            env.call_method(
                builder.as_obj(),
                "setContentText",
                BUILDER_CHAR_SEQUENCE,
                &[JValue::Object(&text)],
            )?;
            Ok(())
        })
    }

    fn set_alerts(&self, builder: &mut GlobalRef, priority: Priority) -> Result<(), HostError> {
        self.with_env("setDefaults/setPriority", |env, _| {
            env.call_method(
                builder.as_obj(),
                "setDefaults",
                BUILDER_INT,
                &[JValue::Int(DEFAULT_ALL)],
            )?;
            env.call_method(
                builder.as_obj(),
                "setPriority",
                BUILDER_INT,
                &[JValue::Int(priority.as_raw())],
            )?;
            Ok(())
        })
    }

    fn set_small_icon(
        &self,
        builder: &mut GlobalRef,
        icon: SmallIcon<'_, GlobalRef>,
    ) -> Result<(), HostError> {
        match icon {
            SmallIcon::AppDefault => self.with_env("setSmallIcon(int)", |env, context| {
                let resource = app_icon_resource(env, context)?;
                env.call_method(
                    builder.as_obj(),
                    "setSmallIcon",
                    BUILDER_INT,
                    &[JValue::Int(resource)],
                )?;
                Ok(())
            }),
            SmallIcon::Bitmap(_) if self.api_level < ICON_MIN_API_LEVEL => {
                Err(HostError::Unavailable(format!(
                    "bitmap small icons need API level {ICON_MIN_API_LEVEL}"
                )))
            }
            SmallIcon::Bitmap(bitmap) => self.with_env("setSmallIcon(Icon)", |env, _| {
                let icon = env
                    .call_static_method(
                        "android/graphics/drawable/Icon",
                        "createWithBitmap",
                        "(Landroid/graphics/Bitmap;)Landroid/graphics/drawable/Icon;",
                        &[JValue::Object(bitmap.as_obj())],
                    )?
                    .l()?;
                env.call_method(
                    builder.as_obj(),
                    "setSmallIcon",
                    "(Landroid/graphics/drawable/Icon;)Landroid/app/Notification$Builder;",
                    &[JValue::Object(&icon)],
                )?;
                Ok(())
            }),
        }
    }

    fn set_large_icon(&self, builder: &mut GlobalRef, bitmap: &GlobalRef) -> Result<(), HostError> {
        self.with_env("setLargeIcon", |env, _| {
            env.call_method(
                builder.as_obj(),
                "setLargeIcon",
                "(Landroid/graphics/Bitmap;)Landroid/app/Notification$Builder;",
                &[JValue::Object(bitmap.as_obj())],
            )?;
            Ok(())
        })
    }

    fn set_style(
        &self,
        builder: &mut GlobalRef,
        style: Style<'_, GlobalRef>,
    ) -> Result<(), HostError> {
        self.with_env("setStyle", |env, _| {
            let native = match style {
                Style::BigText(text) => {
                    let native =
                        env.new_object("android/app/Notification$BigTextStyle", "()V", &[])?;
                    let text = env.new_string(text)?;
                    env.call_method(
                        &native,
                        "bigText",
                        "(Ljava/lang/CharSequence;)Landroid/app/Notification$BigTextStyle;",
                        &[JValue::Object(&text)],
                    )?;
                    native
                }
                Style::Inbox(lines) => {
                    let native =
                        env.new_object("android/app/Notification$InboxStyle", "()V", &[])?;
                    for line in lines {
                        let line = env.new_string(line)?;
                        env.call_method(
                            &native,
                            "addLine",
                            "(Ljava/lang/CharSequence;)Landroid/app/Notification$InboxStyle;",
                            &[JValue::Object(&line)],
                        )?;
                        env.delete_local_ref(line)?;
                    }
                    native
                }
                Style::BigPicture(bitmap) => {
                    let native =
                        env.new_object("android/app/Notification$BigPictureStyle", "()V", &[])?;
                    env.call_method(
                        &native,
                        "bigPicture",
                        "(Landroid/graphics/Bitmap;)Landroid/app/Notification$BigPictureStyle;",
                        &[JValue::Object(bitmap.as_obj())],
                    )?;
                    native
                }
            };
            env.call_method(
                builder.as_obj(),
                "setStyle",
                "(Landroid/app/Notification$Style;)Landroid/app/Notification$Builder;",
                &[JValue::Object(&native)],
            )?;
            Ok(())
        })
    }

    fn decode_bitmap(&self, uri: &ImageUri) -> Result<GlobalRef, HostError> {
        let raw_uri = uri.to_string();
        let bitmap = self.with_env("BitmapFactory.decodeStream", |env, context| {
            let raw = env.new_string(&raw_uri)?;
            let parsed = env
                .call_static_method(
                    "android/net/Uri",
                    "parse",
                    "(Ljava/lang/String;)Landroid/net/Uri;",
                    &[JValue::Object(&raw)],
                )?
                .l()?;
            let resolver = env
                .call_method(
                    context,
                    "getContentResolver",
                    "()Landroid/content/ContentResolver;",
                    &[],
                )?
                .l()?;
            let stream = env
                .call_method(
                    &resolver,
                    "openInputStream",
                    "(Landroid/net/Uri;)Ljava/io/InputStream;",
                    &[JValue::Object(&parsed)],
                )?
                .l()?;
            let decoded = env
                .call_static_method(
                    "android/graphics/BitmapFactory",
                    "decodeStream",
                    "(Ljava/io/InputStream;)Landroid/graphics/Bitmap;",
                    &[JValue::Object(&stream)],
                )
                .and_then(|value| value.l());
            // No JNI call may run while an exception is pending.
            if decoded.is_err() {
                clear_exception(env);
            }
            let bitmap = close_after(decoded, || {
                env.call_method(&stream, "close", "()V", &[]).map(drop)
            })?;

            if bitmap.is_null() {
                Ok(None)
            } else {
                env.new_global_ref(bitmap).map(Some)
            }
        })?;
        bitmap.ok_or_else(|| decode_failure(uri))
    }

    fn app_icon_bitmap(&self) -> Result<GlobalRef, HostError> {
        let bitmap = self.with_env("BitmapFactory.decodeResource", |env, context| {
            let resource = app_icon_resource(env, context)?;
            let resources = env
                .call_method(
                    context,
                    "getResources",
                    "()Landroid/content/res/Resources;",
                    &[],
                )?
                .l()?;
            let bitmap = env
                .call_static_method(
                    "android/graphics/BitmapFactory",
                    "decodeResource",
                    "(Landroid/content/res/Resources;I)Landroid/graphics/Bitmap;",
                    &[JValue::Object(&resources), JValue::Int(resource)],
                )?
                .l()?;

            if bitmap.is_null() {
                Ok(None)
            } else {
                env.new_global_ref(bitmap).map(Some)
            }
        })?;
        bitmap.ok_or_else(|| decode_failure("application icon"))
    }

    fn notify(&self, id: NotificationId, builder: GlobalRef) -> Result<(), HostError> {
        self.with_env("NotificationManager.notify", |env, context| {
            let notification = env
                .call_method(builder.as_obj(), "build", "()Landroid/app/Notification;", &[])?
                .l()?;
            let manager = notification_manager(env, context)?;
            env.call_method(
                &manager,
                "notify",
                "(ILandroid/app/Notification;)V",
                &[JValue::Int(id.get()), JValue::Object(&notification)],
            )?;
            Ok(())
        })
    }
}

