#![allow(non_snake_case)]

use super::app_status_to_java;
use crate::ffi::CapabilityBridge;
use jni::objects::JObject;
use jni::sys::{jint, jstring, JNI_VERSION_1_8};
use jni::JNIEnv;
use std::os::raw::c_void;

#[cfg(feature = "guest-sdk")]
static BRIDGE: CapabilityBridge<crate::ffi::GuestSdk> = CapabilityBridge::new(crate::ffi::GuestSdk);

#[cfg(not(feature = "guest-sdk"))]
static BRIDGE: CapabilityBridge<tests::FixedLibrary> = CapabilityBridge::new(tests::FixedLibrary);

/// 库被 `System.loadLibrary` 加载时初始化日志
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    crate::init();
    log::debug!("VMGuestAppMonitorNative loaded");
    JNI_VERSION_1_8
}

/// `public native int enable();`
#[no_mangle]
pub extern "system" fn Java_org_apache_ambari_servicemonitor_reporting_vsphere_VMGuestApi_enable(
    _env: JNIEnv,
    _this: JObject,
) -> jint {
    BRIDGE.enable()
}

/// `public native int disable();`
#[no_mangle]
pub extern "system" fn Java_org_apache_ambari_servicemonitor_reporting_vsphere_VMGuestApi_disable(
    _env: JNIEnv,
    _this: JObject,
) -> jint {
    BRIDGE.disable()
}

/// `public native int isEnabled();`
#[no_mangle]
pub extern "system" fn Java_org_apache_ambari_servicemonitor_reporting_vsphere_VMGuestApi_isEnabled(
    _env: JNIEnv,
    _this: JObject,
) -> jint {
    BRIDGE.is_enabled()
}

/// `public native int markActive();`
#[no_mangle]
pub extern "system" fn Java_org_apache_ambari_servicemonitor_reporting_vsphere_VMGuestApi_markActive(
    _env: JNIEnv,
    _this: JObject,
) -> jint {
    BRIDGE.mark_active()
}

/// `public native String getAppStatus();`
#[no_mangle]
pub extern "system" fn Java_org_apache_ambari_servicemonitor_reporting_vsphere_VMGuestApi_getAppStatus(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    app_status_to_java(&mut env, &BRIDGE)
}
