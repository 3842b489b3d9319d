/// 根据需要的属性名（Clark 记法）组装 PROPFIND 请求体。
///
/// `DAV:` 命名空间的属性使用 `D:` 前缀，其它命名空间各自声明一个前缀；
/// 非 Clark 记法的名字（例如头部风格的 `content-length`）不是 XML 属性，直接忽略。
/// 属性列表为空时退化为 `<D:allprop/>`。
pub fn build_propfind_body(properties: &[&str]) -> String {
    let mut props = String::new();

    for (index, name) in properties.iter().enumerate() {
        let Some((namespace, local)) = split_clark(name) else {
            continue;
        };
        if namespace == "DAV:" {
            props.push_str(&format!("<D:{local}/>"));
        } else {
            props.push_str(&format!("<x{index}:{local} xmlns:x{index}=\"{namespace}\"/>"));
        }
    }

    let inner = if props.is_empty() {
        "<D:allprop/>".to_string()
    } else {
        format!("<D:prop>{props}</D:prop>")
    };

    format!(
        r#"<?xml version="1.0" encoding="utf-8" ?>
<D:propfind xmlns:D="DAV:">{inner}</D:propfind>"#
    )
}

/// `{namespace}local` → (namespace, local)
fn split_clark(name: &str) -> Option<(&str, &str)> {
    let rest = name.strip_prefix('{')?;
    let (namespace, local) = rest.split_once('}')?;
    if local.is_empty() {
        return None;
    }
    Some((namespace, local))
}
