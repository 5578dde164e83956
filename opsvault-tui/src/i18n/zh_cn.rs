//! Simplified Chinese translations.

use super::keys::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "opsvault",
        add: "新增",
        edit: "编辑",
        delete: "删除",
        save: "保存",
        cancel: "取消",
        confirm: "确认",
        quit: "退出",
        loading: "加载中...",
        yes: "是",
        no: "否",
        id: "ID",
        created_at: "创建时间",
        updated_at: "更新时间",
    },
    nav: NavTexts {
        title: "菜单",
        accounts: "账号",
        hosts: "主机",
        secrets: "密钥",
        sites: "站点",
        logout: "退出登录",
    },
    login: LoginTexts {
        title: "登录",
        username: "用户名",
        password: "密码",
        submit: "登录",
        hint: "Tab 切换字段 · Enter 提交",
    },
    records: RecordsTexts {
        empty_title: "暂无数据",
        empty_hint: "按 Alt+a 创建第一条记录",
        search: "搜索",
        selected: "已选",
        page_of: "/",
        total: "共",
        csv_unavailable: "此页面不支持 CSV 导入导出",
    },
    modal: ModalTexts {
        create_title: "新增",
        edit_title: "编辑",
        delete_title: "确认删除",
        delete_one: "删除这条记录？",
        delete_many: "删除选中的 {} 条记录？",
        required_mark: "*",
        field_required: "此项为必填项",
        generate_hint: "Alt+g 生成",
        logo_disabled: "（请先填写依赖字段）",
    },
    help: HelpTexts {
        title: "帮助",
        lines: &[
            "Tab          切换面板",
            "上/下        移动选择",
            "左/右        上一页 / 下一页",
            "空格         选择当前行",
            "Alt+空格     全选/取消全选",
            "Alt+a        新增记录",
            "Alt+e/Enter  编辑记录",
            "Alt+d        删除当前行",
            "Alt+Shift+D  删除选中项",
            "/            搜索",
            "Alt+v        显示/隐藏密文",
            "Alt+c        复制单元格",
            "Alt+i/Alt+x  导入 / 导出 CSV",
            "Alt+l        切换语言",
            "Alt+q        退出",
        ],
    },
    accounts: AccountsTexts {
        title: "账号管理",
        platform: "平台",
        platform_url: "平台地址",
        logo: "图标",
        username: "用户名",
        password: "密码",
        security_email: "安全邮箱",
        security_phone: "安全电话",
        remark: "备注",
    },
    hosts: HostsTexts {
        title: "主机管理",
        provider: "服务商",
        provider_url: "服务商地址",
        address: "地址",
        ports: "端口",
        username: "用户名",
        password: "密码",
        hostname: "主机名",
        os: "操作系统",
        logo: "图标",
        cpu_capacity: "CPU",
        ram_capacity: "内存",
        disk_capacity: "磁盘",
        specs: "配置",
        cpu_placeholder: "核数",
        ram_placeholder: "容量",
        disk_placeholder: "容量",
    },
    secrets: SecretsTexts {
        title: "密钥管理",
        platform: "平台",
        platform_url: "平台地址",
        logo: "图标",
        key_id: "Key ID",
        key_secret: "Key Secret",
        remark: "备注",
    },
    sites: SitesTexts {
        title: "站点管理",
        name: "名称",
        url: "地址",
        logo: "图标",
    },
};
