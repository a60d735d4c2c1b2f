//! Android permission implementation using JNI.

use crate::{Permission, PermissionError, PermissionGate, PermissionStatus, REQUEST_CODE};
use jni::objects::{GlobalRef, JObject, JValue};
use jni::{JNIEnv, JavaVM};
use std::fmt;

/// `PackageManager.PERMISSION_GRANTED`.
const PERMISSION_GRANTED: i32 = 0;

/// Permission gate bound to an Android `Activity`.
///
/// Holds the `JavaVM` and a global reference to the activity so it can be
/// used from any thread; each call attaches the current thread for its
/// duration.
pub struct AndroidPermissionGate {
    vm: JavaVM,
    activity: GlobalRef,
}

impl fmt::Debug for AndroidPermissionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndroidPermissionGate").finish_non_exhaustive()
    }
}

impl AndroidPermissionGate {
    /// Create a gate from the activity that will host permission prompts.
    ///
    /// # Errors
    /// Returns a [`PermissionError`] if the VM or a global reference cannot be
    /// obtained.
    pub fn new(env: &JNIEnv<'_>, activity: &JObject<'_>) -> Result<Self, PermissionError> {
        let vm = env
            .get_java_vm()
            .map_err(|e| PermissionError::Platform(format!("get_java_vm failed: {e}")))?;
        let activity = env
            .new_global_ref(activity)
            .map_err(|e| PermissionError::Platform(format!("new_global_ref failed: {e}")))?;
        Ok(Self { vm, activity })
    }

    fn with_env<T, F>(&self, call: &str, action: F) -> Result<T, PermissionError>
    where
        F: FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
    {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| PermissionError::Platform(format!("attach_current_thread: {e}")))?;
        let activity = self.activity.as_obj();

        let result = env.with_local_frame(8, |env| action(env, activity));
        result.map_err(|e| {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_describe();
                let _ = env.exception_clear();
            }
            PermissionError::Platform(format!("{call}: {e}"))
        })
    }

    /// `Build.VERSION.SDK_INT` of the running device.
    ///
    /// # Errors
    /// Returns a [`PermissionError`] if the field cannot be read.
    pub fn api_level(&self) -> Result<i32, PermissionError> {
        self.with_env("Build.VERSION.SDK_INT", |env, _| {
            env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?
                .i()
        })
    }
}

impl PermissionGate for AndroidPermissionGate {
    fn status(&self, permission: Permission) -> Result<PermissionStatus, PermissionError> {
        if !permission.is_runtime(self.api_level()?) {
            return Ok(PermissionStatus::NotRequired);
        }

        let result = self.with_env("checkSelfPermission", |env, activity| {
            let name = env.new_string(permission.manifest_name())?;
            env.call_method(
                activity,
                "checkSelfPermission",
                "(Ljava/lang/String;)I",
                &[JValue::Object(&name)],
            )?
            .i()
        })?;

        Ok(if result == PERMISSION_GRANTED {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        })
    }

    fn request(&self, permission: Permission) -> Result<(), PermissionError> {
        self.with_env("requestPermissions", |env, activity| {
            let name = env.new_string(permission.manifest_name())?;
            let permissions = env.new_object_array(1, "java/lang/String", &name)?;
            env.call_method(
                activity,
                "requestPermissions",
                "([Ljava/lang/String;I)V",
                &[JValue::Object(&permissions), JValue::Int(REQUEST_CODE)],
            )?;
            Ok(())
        })
    }
}
