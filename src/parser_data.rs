// ---------------------------------------------------------------------------
// Internal data structs carried inside CompiledParser<T>
// ---------------------------------------------------------------------------

pub(crate) struct BrowserData {
    pub name: String,
    pub version_template: Option<String>,
}

pub(crate) struct OsData {
    pub name: String,
    pub version_template: Option<String>,
}

pub(crate) struct DeviceData {
    pub name: String,
}
