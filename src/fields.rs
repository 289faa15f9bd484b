//! Field catalogue.
//!
//! Every well-known environment field is declared once in the table at the
//! bottom of this file. The table expands into the [`Field`] enum and into
//! one named accessor per field on [`ServerEnvironment`].

use crate::environment::{FieldValue, ServerEnvironment};
use std::fmt;

/// Target type of a catalogue field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `Option<String>`
    Text,
    /// `Option<i64>`
    Integer,
    /// `Option<f64>`
    Float,
    /// `Vec<RawValue>`, empty when absent
    List,
    /// `bool`, `false` when absent
    Flag,
}

impl FieldKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::List => "list",
            FieldKind::Flag => "flag",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How careful output must be with a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sensitivity {
    Public,
    /// Identifies a person (addresses, user names)
    Personal,
    /// Secret material (passwords, digests)
    Credential,
}

macro_rules! field_catalogue {
    (@ret Text) => { Option<String> };
    (@ret Integer) => { Option<i64> };
    (@ret Float) => { Option<f64> };
    (@ret List) => { Vec<crate::value::RawValue> };
    (@ret Flag) => { bool };

    (@get Text, $view:expr, $key:literal) => { $view.get_string($key) };
    (@get Integer, $view:expr, $key:literal) => { $view.get_int($key) };
    (@get Float, $view:expr, $key:literal) => { $view.get_float($key) };
    (@get List, $view:expr, $key:literal) => { $view.get_list($key) };
    (@get Flag, $view:expr, $key:literal) => { $view.get_bool($key) };

    (
        $(
            $(#[doc = $doc:literal])*
            $variant:ident($key:literal, $kind:ident, $sensitivity:ident) => $method:ident;
        )+
    ) => {
        /// A well-known server environment field.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $(
                $(#[doc = $doc])*
                $variant,
            )+
        }

        impl Field {
            /// Every field, in catalogue order.
            pub const ALL: &'static [Field] = &[$(Field::$variant),+];

            /// Canonical key in the environment map.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Field::$variant => $key,)+
                }
            }

            #[must_use]
            pub const fn kind(self) -> FieldKind {
                match self {
                    $(Field::$variant => FieldKind::$kind,)+
                }
            }

            #[must_use]
            pub const fn sensitivity(self) -> Sensitivity {
                match self {
                    $(Field::$variant => Sensitivity::$sensitivity,)+
                }
            }

            /// Name of the [`ServerEnvironment`] accessor for this field.
            #[must_use]
            pub const fn accessor(self) -> &'static str {
                match self {
                    $(Field::$variant => stringify!($method),)+
                }
            }

            /// Look a field up by its canonical key (case-sensitive).
            #[must_use]
            pub fn from_key(key: &str) -> Option<Field> {
                match key {
                    $($key => Some(Field::$variant),)+
                    _ => None,
                }
            }

            /// Read this field through its named accessor.
            #[must_use]
            pub fn read(self, env: &ServerEnvironment) -> FieldValue {
                match self {
                    $(Field::$variant => FieldValue::from(env.$method()),)+
                }
            }
        }

        impl ServerEnvironment {
            $(
                $(#[doc = $doc])*
                #[doc = ""]
                #[doc = concat!("Reads `", $key, "`.")]
                #[must_use]
                pub fn $method(&self) -> field_catalogue!(@ret $kind) {
                    field_catalogue!(@get $kind, self.view(), $key)
                }
            )+
        }
    };
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

field_catalogue! {
    /// Path of the executing script relative to the document root.
    ScriptPath("PHP_SELF", Text, Public) => script_path;
    /// Arguments passed to the script.
    Arguments("argv", List, Public) => arguments;
    /// Number of arguments passed to the script.
    ArgumentCount("argc", Integer, Public) => argument_count;
    /// CGI revision, e.g. `CGI/1.1`.
    GatewayInterface("GATEWAY_INTERFACE", Text, Public) => gateway_interface;
    /// IP address of the server.
    ServerAddress("SERVER_ADDR", Text, Public) => server_address;
    /// Host name of the server.
    ServerName("SERVER_NAME", Text, Public) => server_name;
    /// Server identification string.
    ServerSoftware("SERVER_SOFTWARE", Text, Public) => server_software;
    /// Protocol revision of the request, e.g. `HTTP/1.1`.
    ServerProtocol("SERVER_PROTOCOL", Text, Public) => server_protocol;
    /// Request method, e.g. `GET`.
    RequestMethod("REQUEST_METHOD", Text, Public) => request_method;
    /// Request start as a Unix timestamp.
    RequestTime("REQUEST_TIME", Integer, Public) => request_time;
    /// Request start as a Unix timestamp with microsecond fraction.
    RequestTimeFloat("REQUEST_TIME_FLOAT", Float, Public) => request_time_float;
    /// Query string, without the leading `?`.
    QueryString("QUERY_STRING", Text, Public) => query_string;
    /// Document root directory of the executing script.
    DocumentRoot("DOCUMENT_ROOT", Text, Public) => document_root;
    /// `Accept` request header.
    AcceptHeader("HTTP_ACCEPT", Text, Public) => accept_header;
    /// `Accept-Charset` request header.
    AcceptCharsetHeader("HTTP_ACCEPT_CHARSET", Text, Public) => accept_charset_header;
    /// `Accept-Encoding` request header.
    AcceptEncodingHeader("HTTP_ACCEPT_ENCODING", Text, Public) => accept_encoding_header;
    /// `Accept-Language` request header.
    AcceptLanguageHeader("HTTP_ACCEPT_LANGUAGE", Text, Public) => accept_language_header;
    /// `Connection` request header.
    ConnectionHeader("HTTP_CONNECTION", Text, Public) => connection_header;
    /// `Host` request header.
    HostHeader("HTTP_HOST", Text, Public) => host_header;
    /// `Referer` request header.
    RefererHeader("HTTP_REFERER", Text, Public) => referer_header;
    /// `User-Agent` request header.
    UserAgentHeader("HTTP_USER_AGENT", Text, Public) => user_agent_header;
    /// Whether the request came over a secure transport.
    Https("HTTPS", Flag, Public) => is_https;
    /// IP address of the client.
    RemoteAddress("REMOTE_ADDR", Text, Personal) => remote_address;
    /// Reverse-resolved host name of the client.
    RemoteHost("REMOTE_HOST", Text, Personal) => remote_host;
    /// Client port.
    RemotePort("REMOTE_PORT", Text, Public) => remote_port;
    /// Authenticated user.
    RemoteUser("REMOTE_USER", Text, Personal) => remote_user;
    /// Authenticated user before an internal redirect.
    RedirectRemoteUser("REDIRECT_REMOTE_USER", Text, Personal) => redirect_remote_user;
    /// Absolute path of the executing script.
    ScriptFilename("SCRIPT_FILENAME", Text, Public) => script_filename;
    /// Administrator contact from the server configuration.
    ServerAdmin("SERVER_ADMIN", Text, Personal) => server_admin;
    /// Port the server accepted the request on.
    ServerPort("SERVER_PORT", Text, Public) => server_port;
    /// Server version and virtual host line.
    ServerSignature("SERVER_SIGNATURE", Text, Public) => server_signature;
    /// Filesystem path derived from the path info.
    PathTranslated("PATH_TRANSLATED", Text, Public) => path_translated;
    /// Path of the current script.
    ScriptName("SCRIPT_NAME", Text, Public) => script_name;
    /// URI used to reach the page.
    RequestUri("REQUEST_URI", Text, Public) => request_uri;
    /// Raw `Authorization` header of a digest authentication.
    AuthDigest("PHP_AUTH_DIGEST", Text, Credential) => auth_digest;
    /// User name from HTTP authentication.
    AuthUser("PHP_AUTH_USER", Text, Personal) => auth_user;
    /// Password from HTTP authentication.
    AuthPassword("PHP_AUTH_PW", Text, Credential) => auth_password;
    /// Authentication scheme, e.g. `Basic`.
    AuthType("AUTH_TYPE", Text, Public) => auth_type;
    /// Client-supplied path info after the script name.
    PathInfo("PATH_INFO", Text, Public) => path_info;
    /// Path info before the server rewrote it.
    OriginalPathInfo("ORIG_PATH_INFO", Text, Public) => original_path_info;
}
