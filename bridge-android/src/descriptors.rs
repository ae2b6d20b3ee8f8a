//! JNI class names and method descriptors used by the Android adapters.

pub const VIDEO_MEDIA_CLASS: &str = "android/provider/MediaStore$Video$Media";
pub const BUILD_VERSION_CLASS: &str = "android/os/Build$VERSION";
pub const STRING_CLASS: &str = "java/lang/String";

pub const URI_TYPE: &str = "Landroid/net/Uri;";

pub const GET_CONTENT_RESOLVER_SIG: &str = "()Landroid/content/ContentResolver;";
pub const GET_CONTENT_URI_SIG: &str = "(Ljava/lang/String;)Landroid/net/Uri;";
pub const RESOLVER_QUERY_SIG: &str = "(Landroid/net/Uri;[Ljava/lang/String;Ljava/lang/String;\
                                      [Ljava/lang/String;Ljava/lang/String;)Landroid/database/Cursor;";

pub const MOVE_TO_NEXT_SIG: &str = "()Z";
pub const GET_COLUMN_INDEX_OR_THROW_SIG: &str = "(Ljava/lang/String;)I";
pub const IS_NULL_SIG: &str = "(I)Z";
pub const GET_LONG_SIG: &str = "(I)J";
pub const GET_STRING_SIG: &str = "(I)Ljava/lang/String;";
pub const CLOSE_SIG: &str = "()V";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_signature_has_no_whitespace() {
        assert!(!RESOLVER_QUERY_SIG.contains(' '));
        assert_eq!(
            RESOLVER_QUERY_SIG,
            "(Landroid/net/Uri;[Ljava/lang/String;Ljava/lang/String;[Ljava/lang/String;Ljava/lang/String;)Landroid/database/Cursor;"
        );
    }
}
