use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=VMWARE_GUESTSDK_INCLUDE");
    println!("cargo:rerun-if-env-changed=VMWARE_GUESTSDK_LIB");

    if env::var_os("CARGO_FEATURE_GUEST_SDK").is_none() {
        // 没有 Guest SDK 时只构建可用桩库测试的桥接层
        return;
    }

    #[cfg(feature = "guest-sdk")]
    guest_sdk::generate();
}

#[cfg(feature = "guest-sdk")]
mod guest_sdk {
    use std::env;
    use std::path::PathBuf;

    /// 为 vmGuestAppMonitorLib.h 生成绑定，并输出链接指令
    pub fn generate() {
        println!("cargo:rerun-if-changed=wrapper.h");

        let mut builder = bindgen::Builder::default()
            .header("wrapper.h")
            .allowlist_function("VMGuestAppMonitor_.*")
            .allowlist_type("VMGuestAppMonitorLibError");

        // SDK 头文件不随仓库分发，位置由环境变量给出
        if let Ok(include) = env::var("VMWARE_GUESTSDK_INCLUDE") {
            builder = builder.clang_arg(format!("-I{}", include));
        }

        let bindings = builder
            .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
            .generate()
            .expect("Unable to generate bindings for vmGuestAppMonitorLib.h");

        let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
        bindings
            .write_to_file(out_path.join("bindings.rs"))
            .expect("Couldn't write bindings!");

        if let Ok(lib_dir) = env::var("VMWARE_GUESTSDK_LIB") {
            println!("cargo:rustc-link-search=native={}", lib_dir);
        }
        println!("cargo:rustc-link-lib=dylib=appmonitorlib");
    }
}
