//! vmGuestAppMonitorLib.h 的绑定，由 build.rs 通过 bindgen 生成
#![allow(non_upper_case_globals, non_camel_case_types, non_snake_case, dead_code)]

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
