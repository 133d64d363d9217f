//! Index page listing every test link of a profile

use super::pages;
use super::Profile;
use std::fmt::Write;

/// One link on the index page
struct Link {
    href: &'static str,
    label: &'static str,
    /// Text after the link; `{hash}` is replaced with the favicon hash
    note: &'static str,
}

struct Section {
    title: &'static str,
    links: &'static [Link],
}

const fn link(href: &'static str, label: &'static str) -> Link {
    Link {
        href,
        label,
        note: "",
    }
}

const ARL_SECTION: Section = Section {
    title: "ARL 指纹测试 (覆盖所有条件类型)",
    links: &[
        Link {
            href: "/arl/body",
            label: "body 条件测试",
            note: r#" - body="thinkphp""#,
        },
        Link {
            href: "/arl/header",
            label: "header 条件测试",
            note: r#" - header="X-Powered-By: ThinkPHP""#,
        },
        Link {
            href: "/arl/title",
            label: "title 条件测试",
            note: r#" - title="若依管理系统""#,
        },
        Link {
            href: "/arl/icon_hash",
            label: "icon_hash 条件测试",
            note: r#" - icon_hash="{hash}""#,
        },
        Link {
            href: "/arl/combined",
            label: "组合条件测试",
            note: " - body && header && title",
        },
    ],
};

const SHARED_SECTIONS: &[Section] = &[
    Section {
        title: "EHole 指纹测试",
        links: &[
            link("/ehole/shiro", "Shiro (Header: rememberMe)"),
            link("/ehole/swagger", "Swagger UI (Body keyword)"),
            link("/ehole/spring", "Spring Boot (Body keyword)"),
            link("/ehole/tomcat", "Tomcat (Body keyword)"),
        ],
    },
    Section {
        title: "Wappalyzer 指纹测试",
        links: &[
            link("/wappalyzer/nginx", "Nginx (Server header)"),
            link("/wappalyzer/php", "PHP (X-Powered-By header)"),
        ],
    },
    Section {
        title: "Goby 指纹测试",
        links: &[
            link("/goby/nacos", "Nacos (Body keyword)"),
            link("/goby/weblogic", "WebLogic (Body keyword)"),
        ],
    },
    Section {
        title: "Fingers 指纹测试",
        links: &[link("/fingers/apache", "Apache (Server header)")],
    },
    Section {
        title: "FingerPrintHub 指纹测试",
        links: &[link("/fingerprinthub/thinkphp", "ThinkPHP (Header keyword)")],
    },
];

/// Render the index page for `profile`
///
/// `favicon_hash` is printed in the ARL section and the page footer when the
/// profile serves the icon.
pub fn render(profile: Profile, favicon_hash: Option<i32>) -> String {
    if profile == Profile::Classic {
        return pages::classic::INDEX.to_string();
    }

    let hash = favicon_hash.map(|h| h.to_string()).unwrap_or_default();
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>指纹测试服务器</title></head>\n<body>\n<h1>指纹测试服务器</h1>\n\n",
    );

    if profile.serves_favicon() {
        write_section(&mut html, &ARL_SECTION, &hash);
    }
    for section in SHARED_SECTIONS {
        write_section(&mut html, section, &hash);
    }

    if favicon_hash.is_some() {
        let _ = writeln!(html, "<p><strong>Favicon MMH3 Hash:</strong> {hash}</p>");
    }
    html.push_str("</body>\n</html>");
    html
}

fn write_section(html: &mut String, section: &Section, hash: &str) {
    let _ = writeln!(html, "<h2>{}</h2>\n<ul>", section.title);
    for item in section.links {
        let note = item.note.replace("{hash}", hash);
        let _ = writeln!(
            html,
            r#"    <li><a href="{}">{}</a>{note}</li>"#,
            item.href, item.label
        );
    }
    html.push_str("</ul>\n\n");
}

/// Every href on a rendered index page
#[cfg(test)]
pub fn hrefs(html: &str) -> Vec<&str> {
    html.split(r#"href=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_index_layout() {
        let html = render(Profile::Full, Some(-1_040_723_617));
        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head><title>指纹测试服务器</title></head>"));
        assert!(html.contains(
            "<h2>ARL 指纹测试 (覆盖所有条件类型)</h2>\n<ul>\n    <li><a href=\"/arl/body\">body 条件测试</a> - body=\"thinkphp\"</li>\n"
        ));
        assert!(html.contains(r#"icon_hash="-1040723617""#));
        assert!(html.ends_with(
            "</ul>\n\n<p><strong>Favicon MMH3 Hash:</strong> -1040723617</p>\n</body>\n</html>"
        ));
    }

    #[test]
    fn test_basic_index_has_no_arl_section() {
        let html = render(Profile::Basic, None);
        assert!(!html.contains("/arl/"));
        assert!(!html.contains("Favicon MMH3 Hash"));
        assert!(html.contains(r#"<a href="/wappalyzer/nginx">"#));
        assert!(html.ends_with("</ul>\n\n</body>\n</html>"));
    }

    #[test]
    fn test_classic_index_is_literal() {
        assert_eq!(render(Profile::Classic, None), pages::classic::INDEX);
    }

    #[test]
    fn test_hrefs() {
        let html = render(Profile::Basic, None);
        let links = hrefs(&html);
        assert_eq!(links.first(), Some(&"/ehole/shiro"));
        assert_eq!(links.len(), 10);
    }
}
