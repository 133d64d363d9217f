//! Canned page bodies
//!
//! Each body carries exactly the keyword, title or markup its signature
//! looks for. Bodies are byte-for-byte what the fixture serves.

// ==================== ARL ====================

pub const ARL_BODY: &str = r#"<!DOCTYPE html>
<html>
<head><title>ThinkPHP Test</title></head>
<body>
<h1>ThinkPHP Framework</h1>
<p>Powered by thinkphp</p>
<div class="thinkphp-logo">ThinkPHP V5.0</div>
</body>
</html>"#;

pub const ARL_HEADER: &str = r"<!DOCTYPE html>
<html>
<head><title>Header Test</title></head>
<body>
<h1>Header Fingerprint Test</h1>
</body>
</html>";

pub const ARL_TITLE: &str = r"<!DOCTYPE html>
<html>
<head><title>若依管理系统</title></head>
<body>
<h1>若依后台管理系统</h1>
<p>RuoYi Management System</p>
</body>
</html>";

pub const ARL_COMBINED: &str = r#"<!DOCTYPE html>
<html>
<head><title>若依管理系统</title></head>
<body>
<h1>若依后台管理系统</h1>
<p>Powered by RuoYi-Vue</p>
<div class="ruoyi-footer">Copyright © RuoYi</div>
</body>
</html>"#;

/// Icon hash page, showing the digest a matching rule should use
pub fn arl_icon_hash(favicon_hash: i32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Icon Hash Test</title>
<link rel="icon" href="/arl/favicon.ico" type="image/x-icon">
</head>
<body>
<h1>Icon Hash Fingerprint Test</h1>
<p>Favicon MMH3 Hash: {favicon_hash}</p>
<p>访问 <a href="/arl/favicon.ico">/arl/favicon.ico</a> 获取图标</p>
</body>
</html>"#
    )
}

// ==================== EHole ====================

pub const EHOLE_SHIRO: &str = "<h1>Shiro Test</h1>";

pub const EHOLE_SWAGGER: &str = r#"<!DOCTYPE html>
<html>
<head><title>Swagger UI</title></head>
<body>
<div id="swagger-ui"></div>
<script src="swagger-ui-bundle.js"></script>
</body>
</html>"#;

pub const SPRING_ACTUATOR: &str =
    r#"{"servletContextInitParams":{},"profiles":["default"],"logback":"enabled"}"#;

pub const EHOLE_TOMCAT: &str = r#"<!DOCTYPE html>
<html>
<head><title>Apache Tomcat</title></head>
<body>
<h1>Apache Tomcat</h1>
<a href="/manager/status">Server Status</a>
<a href="/manager/html">Manager App</a>
</body>
</html>"#;

// ==================== Wappalyzer ====================

pub const WAPPALYZER_NGINX: &str = "<h1>Welcome to nginx!</h1>";

pub const WAPPALYZER_PHP: &str = "<h1>PHP Test</h1>";

// ==================== Goby ====================

pub const GOBY_NACOS: &str = r#"<!DOCTYPE html>
<html>
<head><title>Nacos</title></head>
<body>
<div class="nacos-console">Nacos Console</div>
</body>
</html>"#;

pub const GOBY_WEBLOGIC: &str = r"<!DOCTYPE html>
<html>
<head><title>Error 404--Not Found</title></head>
<body>
<h1>Error 404--Not Found</h1>
</body>
</html>";

// ==================== Fingers ====================

pub const FINGERS_SWAGGER: &str = r#"<!DOCTYPE html>
<html>
<head><title>Swagger UI</title></head>
<body>
<div id="swagger-ui"></div>
<script src="swagger-ui.js"></script>
</body>
</html>"#;

// ==================== FingerPrintHub ====================

pub const FINGERPRINTHUB_EXAMPLE: &str = r"<!DOCTYPE html>
<html>
<head><title>Example Domain</title></head>
<body>
<h1>Example Domain</h1>
<p>This domain is for use in illustrative examples in documents.</p>
</body>
</html>";

pub const NOT_FOUND: &str = "<h1>404 Not Found</h1>";

// ==================== Classic profile ====================

pub mod classic {
    pub const INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Test Server</title>
</head>
<body>
    <h1>指纹测试服务器</h1>
    <ul>
        <li><a href="/wordpress">WordPress (EHole)</a></li>
        <li><a href="/shiro">Shiro (EHole - Header)</a></li>
        <li><a href="/spring">Spring Boot (EHole)</a></li>
        <li><a href="/swagger">Swagger UI (EHole)</a></li>
        <li><a href="/nginx">Nginx (Wappalyzer)</a></li>
        <li><a href="/jquery">jQuery (Wappalyzer)</a></li>
        <li><a href="/php">PHP (Wappalyzer)</a></li>
        <li><a href="/tomcat">Tomcat (多种指纹)</a></li>
        <li><a href="/jenkins">Jenkins (多种指纹)</a></li>
        <li><a href="/gitlab">GitLab (多种指纹)</a></li>
    </ul>
</body>
</html>"#;

    pub const WORDPRESS: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>WordPress Site</title>
    <link rel="stylesheet" href="/wp-content/themes/default/style.css">
</head>
<body>
    <h1>WordPress Test</h1>
    <script src="/wp-includes/js/jquery.js"></script>
</body>
</html>"#;

    pub const SHIRO: &str = r"<!DOCTYPE html>
<html>
<head><title>Shiro App</title></head>
<body><h1>Shiro Test</h1></body>
</html>";

    pub const SWAGGER: &str = r#"<!DOCTYPE html>
<html>
<head><title>Swagger UI</title></head>
<body>
    <div id="swagger-ui"></div>
    <script src="swagger-ui-bundle.js"></script>
</body>
</html>"#;

    pub const NGINX: &str = r"<!DOCTYPE html>
<html>
<head><title>Welcome to nginx!</title></head>
<body>
<h1>Welcome to nginx!</h1>
</body>
</html>";

    pub const JQUERY: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>jQuery Test</title>
    <script src="https://code.jquery.com/jquery-3.6.0.min.js"></script>
</head>
<body>
    <h1>jQuery Test Page</h1>
</body>
</html>"#;

    pub const PHP: &str = r"<!DOCTYPE html>
<html>
<head><title>PHP Test</title></head>
<body><h1>PHP Test Page</h1></body>
</html>";

    pub const TOMCAT: &str = r#"<!DOCTYPE html>
<html>
<head><title>Apache Tomcat</title></head>
<body>
    <h1>Apache Tomcat</h1>
    <p>If you're seeing this, you've successfully installed Tomcat.</p>
    <a href="/manager/status">Server Status</a>
    <a href="/manager/html">Manager App</a>
</body>
</html>"#;

    pub const JENKINS: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Dashboard [Jenkins]</title>
    <link rel="icon" href="/static/favicon.ico">
</head>
<body>
    <div id="jenkins">
        <h1>Jenkins Dashboard</h1>
    </div>
</body>
</html>"#;

    pub const GITLAB: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>GitLab</title>
    <link rel="icon" href="/assets/gitlab_logo-icon.png">
</head>
<body>
    <img src="/assets/gitlab_logo-7ae504fe4f68fdebb3c2034e36621930cd36ea87924c11ff65dbcb8ed50dca58.png" alt="GitLab">
    <h1>GitLab</h1>
</body>
</html>"#;
}
